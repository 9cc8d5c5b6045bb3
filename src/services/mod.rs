//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod certificate_service;
pub mod exam_service;
pub mod question_service;
pub mod topic_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use certificate_service::CertificateService;
pub use exam_service::ExamService;
pub use question_service::QuestionService;
pub use topic_service::TopicService;
