mod test_agencies;
mod test_documents;
mod test_health;
mod test_reports;
