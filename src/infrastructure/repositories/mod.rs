pub mod candidate_repository;
pub mod category_repository;
pub mod resource_repository;
pub mod tag_repository;
pub mod user_interest_repository;

pub use candidate_repository::CandidateRepository;
pub use category_repository::CategoryRepository;
pub use resource_repository::ResourceRepository;
pub use tag_repository::TagRepository;
pub use user_interest_repository::UserInterestRepository;
