//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod country;
pub mod direction;
pub mod education;
pub mod internship_application;
pub mod trainee_profile;
pub mod user;
pub mod work_experience;

// Re-export specific types to avoid conflicts
pub use country::{Column as CountryColumn, Entity as Country, Model as CountryModel};
pub use direction::{Column as DirectionColumn, Entity as Direction, Model as DirectionModel};
pub use education::{Column as EducationColumn, Entity as Education, Model as EducationModel};
pub use internship_application::{
    Column as InternshipApplicationColumn, Entity as InternshipApplication,
    Model as InternshipApplicationModel,
};
pub use trainee_profile::{
    Column as TraineeProfileColumn, Entity as TraineeProfile, Model as TraineeProfileModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use work_experience::{
    Column as WorkExperienceColumn, Entity as WorkExperience, Model as WorkExperienceModel,
};
