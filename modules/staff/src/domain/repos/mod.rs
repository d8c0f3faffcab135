pub mod day_offs_repo;
pub mod users_repo;
pub mod workers_repo;

pub use day_offs_repo::DayOffsRepository;
pub use users_repo::UsersRepository;
pub use workers_repo::WorkersRepository;
