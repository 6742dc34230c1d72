pub mod auth;
pub mod booking_request;
pub mod caregiver_detail;
pub mod caregiver_profile;
pub mod chat;
pub mod dashboard;
pub mod landing;
pub mod pet_form;
pub mod review;
pub mod search;
pub mod verify_email;

pub use auth::Auth;
pub use booking_request::BookingRequest;
pub use caregiver_detail::CaregiverDetail;
pub use caregiver_profile::CaregiverProfile;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use pet_form::PetForm;
pub use review::Review;
pub use search::SearchCaregivers;
pub use verify_email::VerifyEmail;
