pub mod search_records;

pub use search_records::SearchRecordsUseCase;
