use crate::api::documents::{CompleteRequest, ReceiveRequest, ReleaseRequest};
use crate::api::health::HealthResponse;
use crate::api::report::ReportRequest;
use crate::api::{
    agencies, document_actions, document_types, documents, health, notifications, report,
    user_feedbacks, users,
};
use model::{
    Agency, AgencyRef, Document, DocumentAction, DocumentStatus, DocumentType, ErrorResponse,
    Notification, TransitDetail, User, UserFeedback,
};
use registry_service_client::documents::{CompletePayload, ReceivePayload, ReleasePayload};
use registry_service_client::notifications::MarkSeenRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(
            health::health_handler,
            documents::list_documents,
            documents::list_for_dispatch_documents,
            documents::list_incoming_documents,
            documents::list_outgoing_documents,
            documents::list_received_documents,
            documents::list_completed_documents,
            documents::create_document,
            documents::release_document,
            documents::receive_document,
            documents::complete_document,
            documents::cancel_document,
            documents::get_off_transit,
            agencies::list_agencies,
            agencies::get_agency,
            agencies::create_agency,
            agencies::update_agency,
            agencies::delete_agency,
            document_types::list_document_types,
            document_types::get_document_type,
            document_types::create_document_type,
            document_types::update_document_type,
            document_types::delete_document_type,
            document_actions::list_document_actions,
            users::list_users,
            users::create_user,
            users::delete_user,
            users::deactivate_user,
            users::reactivate_user,
            notifications::list_notifications,
            notifications::mark_notifications_seen,
            user_feedbacks::list_user_feedbacks,
            user_feedbacks::create_user_feedback,
            report::export_csv,
            report::export_excel,
        ),
        components(
            schemas(
                HealthResponse,
                ErrorResponse,

                Document,
                DocumentStatus,
                AgencyRef,
                TransitDetail,
                Agency,
                DocumentType,
                DocumentAction,
                User,
                Notification,
                UserFeedback,

                ReleaseRequest,
                ReceiveRequest,
                CompleteRequest,
                ReleasePayload,
                ReceivePayload,
                CompletePayload,
                MarkSeenRequest,
                ReportRequest,
            ),
        ),
        tags(
            (name = "docflow dashboard service", description = "Dashboard gateway to the document registry")
        )
    )]
pub struct ApiDoc;
