// Task module: contains all embassy tasks
//
// There is exactly one task: the blink loop. It owns both hardware
// handles for the lifetime of the firmware.

pub mod blink;

// Re-export tasks for convenient import
pub use blink::blink_task;
