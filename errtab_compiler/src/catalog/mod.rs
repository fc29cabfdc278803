//! Hand-maintained generic error code catalog
//!
//! These are the utility-subsystem codes: caller-defined, positional, never
//! looked up against the system headers. Order is significant - it is the
//! emitted code order.

/// A statically declared generic code, before merge assigns its position.
#[derive(Debug, Clone, Copy)]
pub struct GenericCode {
    pub name: &'static str,
    pub is_error: bool,
    pub flags: u8,
    /// Generic codes carry no OS-level identity.
    pub external_value: Option<i64>,
    pub short_description: &'static str,
    pub long_description: &'static str,
}

/// The generic code list, in emission order.
pub const GENERIC_CODES: &[GenericCode] = &[
    GenericCode {
        name: "OK",
        is_error: false,
        flags: 0,
        external_value: None,
        short_description: "Everything is fine",
        long_description: "",
    },
    GenericCode {
        name: "FAIL",
        is_error: true,
        flags: 0,
        external_value: None,
        short_description: "Generic Failure",
        long_description: "This code should be avoided",
    },
    GenericCode {
        name: "ENOENT",
        is_error: true,
        flags: 0,
        external_value: None,
        short_description: "Requested Item is Missing",
        long_description: "",
    },
    GenericCode {
        name: "UNIMPLEMENTED",
        is_error: true,
        flags: 0,
        external_value: None,
        short_description: "Functionality has not been implemented",
        long_description: "",
    },
    GenericCode {
        name: "EINVAL",
        is_error: true,
        flags: 0,
        external_value: None,
        short_description: "Invalid request",
        long_description: "",
    },
    GenericCode {
        name: "EOF",
        is_error: false,
        flags: 0,
        external_value: None,
        short_description: "End of stream/list/file/foo",
        long_description: "",
    },
    GenericCode {
        name: "UNITTEST",
        is_error: true,
        flags: 0,
        external_value: None,
        short_description: "UnitTest failed",
        long_description: "This error is produced when a specific check of a unit-test fails",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        assert_eq!(GENERIC_CODES[0].name, "OK");
        assert_eq!(GENERIC_CODES[1].name, "FAIL");
        assert_eq!(GENERIC_CODES.last().map(|c| c.name), Some("UNITTEST"));
    }

    #[test]
    fn test_status_codes_are_not_errors() {
        let ok = GENERIC_CODES.iter().find(|c| c.name == "OK");
        let eof = GENERIC_CODES.iter().find(|c| c.name == "EOF");
        assert!(matches!(ok, Some(c) if !c.is_error));
        assert!(matches!(eof, Some(c) if !c.is_error));
    }

    #[test]
    fn test_no_external_values_in_catalog() {
        assert!(GENERIC_CODES.iter().all(|c| c.external_value.is_none()));
    }
}
