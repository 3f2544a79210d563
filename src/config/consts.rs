/// Support declarations included at the top of every driver header
pub const SUPPORT_INCLUDE: &str = "support_proto.h";
/// File name of a rendered driver header inside a task's output directory
pub const DRIVER_HEADER_FILE: &str = "driver.h";
/// Scope name used for driver functions in validation errors
pub const DRIVER_SCOPE: &str = "driver";
