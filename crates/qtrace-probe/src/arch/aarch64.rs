//! aarch64 probe emitter
//!
//! Same SDT note layout as x86_64 with two differences: the landing pad is
//! the 4-byte A64 `nop`, and register operands render in the default
//! `x0`-style spelling (no AT&T prefix), which is what SDT consumers expect
//! on this architecture.

/// Emit one probe site. Entry patterns match the x86_64 emitter; see
/// `arch/x86_64.rs` for the layout description.
#[macro_export]
#[doc(hidden)]
macro_rules! _qtrace_sdt {
    (@probe $name:ident, $args_tmpl:literal $(, $arg:expr)*) => {{
        unsafe {
            ::core::arch::asm!(
                "990:   nop",
                "       .pushsection .note.stapsdt,\"?\",\"note\"",
                "       .balign 4",
                "       .4byte 992f-991f, 994f-993f, 3",
                "991:   .asciz \"stapsdt\"",
                "992:   .balign 4",
                "993:   .8byte 990b",
                "       .8byte _.stapsdt.base",
                "       .8byte 0",
                "       .asciz \"qtrace\"",
                ::core::concat!("       .asciz \"", ::core::stringify!($name), "\""),
                ::core::concat!("       .asciz \"", $args_tmpl, "\""),
                "994:   .balign 4",
                "       .popsection",
                ".ifndef _.stapsdt.base",
                "       .pushsection .stapsdt.base,\"aG\",\"progbits\",.stapsdt.base,comdat",
                "       .weak _.stapsdt.base",
                "       .hidden _.stapsdt.base",
                "_.stapsdt.base: .space 1",
                "       .size _.stapsdt.base, 1",
                "       .popsection",
                ".endif",
                $(in(reg) $crate::MarkerArg::to_reg($arg),)*
                options(readonly, nostack, preserves_flags)
            );
        }
    }};
    (@probe_sema $name:ident, $args_tmpl:literal $(, $arg:expr)*) => {{
        unsafe {
            ::core::arch::asm!(
                "990:   nop",
                "       .pushsection .note.stapsdt,\"?\",\"note\"",
                "       .balign 4",
                "       .4byte 992f-991f, 994f-993f, 3",
                "991:   .asciz \"stapsdt\"",
                "992:   .balign 4",
                "993:   .8byte 990b",
                "       .8byte _.stapsdt.base",
                "       .8byte {_sema}",
                "       .asciz \"qtrace\"",
                ::core::concat!("       .asciz \"", ::core::stringify!($name), "\""),
                ::core::concat!("       .asciz \"", $args_tmpl, "\""),
                "994:   .balign 4",
                "       .popsection",
                ".ifndef _.stapsdt.base",
                "       .pushsection .stapsdt.base,\"aG\",\"progbits\",.stapsdt.base,comdat",
                "       .weak _.stapsdt.base",
                "       .hidden _.stapsdt.base",
                "_.stapsdt.base: .space 1",
                "       .size _.stapsdt.base, 1",
                "       .popsection",
                ".endif",
                $(in(reg) $crate::MarkerArg::to_reg($arg),)*
                _sema = sym $name,
                options(readonly, nostack, preserves_flags)
            );
        }
    }};
}
