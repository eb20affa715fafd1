//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod address_repo;
pub mod area_repo;
pub mod category_repo;
pub mod curriculum_repo;
pub mod employee_repo;
pub mod enterprise_repo;
pub mod favorite_repo;
pub mod follow_repo;
pub mod industry_repo;
pub mod media_repo;
pub mod notification_repo;
pub mod post_repo;
pub mod reaction_repo;
pub mod review_repo;
pub mod role_repo;
pub mod saved_search_repo;
pub mod skill_repo;
pub mod user_repo;
pub mod user_role_repo;
pub mod vacancy_repo;

pub use address_repo::AddressRepo;
pub use area_repo::AreaRepo;
pub use category_repo::CategoryRepo;
pub use curriculum_repo::CurriculumRepo;
pub use employee_repo::EmployeeRepo;
pub use enterprise_repo::EnterpriseRepo;
pub use favorite_repo::FavoriteRepo;
pub use follow_repo::FollowRepo;
pub use industry_repo::IndustryRepo;
pub use media_repo::MediaRepo;
pub use notification_repo::NotificationRepo;
pub use post_repo::PostRepo;
pub use reaction_repo::ReactionRepo;
pub use review_repo::ReviewRepo;
pub use role_repo::RoleRepo;
pub use saved_search_repo::SavedSearchRepo;
pub use skill_repo::{SkillRepo, UserSkillRepo, VacancySkillRepo};
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
pub use vacancy_repo::VacancyRepo;
