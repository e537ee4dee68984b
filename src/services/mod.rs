pub mod finn_query_service;
