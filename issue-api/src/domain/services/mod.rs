mod issues;

pub use issues::IssueServiceImpl;
