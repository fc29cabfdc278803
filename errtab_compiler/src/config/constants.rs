pub mod compile_time {
    pub mod inputs {
        /// Directory holding the error declaration sources, relative to the
        /// declarations root handed to the generator.
        pub const DECLS_DIR: &str = "error_decls";

        /// Base system header: the low/common error number definitions.
        pub const ERRNO_BASE_HEADER: &str = "errno-base.h";

        /// Extended system header: the remaining error number definitions.
        /// Logically one mapping together with the base header; the split is
        /// an artifact of how the platform documents its values.
        pub const ERRNO_HEADER: &str = "errno.h";

        /// Documentation blob with per-error descriptive text.
        pub const ERRNO_DOC: &str = "errno.dat";

        /// Maximum input file size accepted for any source (4MB).
        /// Inputs are small header/documentation files; anything larger is
        /// a wrong path, not a real source.
        pub const MAX_INPUT_SIZE: u64 = 4 * 1024 * 1024;
    }

    pub mod outputs {
        /// Definitions artifact: subsystem enum, code constants, macros.
        pub const HEADER_ARTIFACT: &str = "error_codes.h";

        /// Data artifact: string tables and table-of-tables registries.
        pub const SOURCE_ARTIFACT: &str = "error_codes.c";
    }

    pub mod taxonomy {
        /// Fixed subsystem emission order. Position here is the subsystem
        /// ordinal: it forms the high bits of every composite code and the
        /// index of every table-of-tables slot. Reordering renumbers every
        /// previously emitted code.
        pub const SUBSYSTEM_ORDER: &[&str] = &["UTIL", "ERRNO"];

        /// The generic utility subsystem. Its symbols omit the subsystem
        /// infix (ERR_OK rather than ERR_UTIL_OK).
        pub const UTILITY_SUBSYSTEM: &str = "UTIL";

        /// The system-error subsystem, populated from the scraped headers
        /// and documentation.
        pub const SYSTEM_SUBSYSTEM: &str = "ERRNO";

        /// Bit position separating subsystem ordinal from in-subsystem code
        /// in a composite code constant.
        pub const COMPOSITE_CODE_SHIFT: u32 = 32;

        /// Flag bit marking a transient error condition.
        pub const FLAG_TRANSIENT: u8 = 1 << 7;

        /// Flag bit marking a critical error condition.
        pub const FLAG_CRITICAL: u8 = 1 << 6;
    }

    pub mod parsing {
        /// Leading-space count that marks a documentation heading line.
        pub const HEADING_INDENT: usize = 7;

        /// The define keyword recognized by the value resolver.
        pub const DEFINE_KEYWORD: &str = "#define";

        /// Exact token count of a recognized value definition line.
        pub const DEFINE_TOKEN_COUNT: usize = 3;
    }

    pub mod logging {
        /// Buffered events retained by the in-memory test logger.
        pub const MEMORY_LOG_CAPACITY: usize = 1024;
    }
}
