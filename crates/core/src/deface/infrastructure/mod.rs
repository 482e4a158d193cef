pub mod http_anonymizer;
