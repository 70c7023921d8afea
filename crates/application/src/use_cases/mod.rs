pub mod search;

pub use search::SearchRecordsUseCase;
