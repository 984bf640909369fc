// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, Mutex as StdMutex};

use super::StdoutMock;
use crate::OutputDevice;

pub trait OutputDeviceExt {
    /// A device that writes into the returned [`StdoutMock`].
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mock_output_device() {
        let (device, mock) = OutputDevice::new_mock();
        let mut_ref = crate::lock_output_device_as_mut!(device);
        mut_ref.write_all(b"Hello, world!\n").unwrap();
        assert_eq!(mock.get_copy_of_buffer_as_string(), "Hello, world!\n");
        assert!(device.is_mock);
    }
}
