mod quiz_vm;
mod registration_vm;
mod result_vm;

pub use quiz_vm::{OptionVm, QuizVm, Settling};
pub use registration_vm::RegistrationVm;
pub use result_vm::ResultVm;
