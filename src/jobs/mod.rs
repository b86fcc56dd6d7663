pub mod admissions;
pub mod colleges;
pub mod update_file;

pub use admissions::AdmissionsJob;
pub use colleges::CollegeFilterJob;
pub use update_file::UpdateFileJob;
