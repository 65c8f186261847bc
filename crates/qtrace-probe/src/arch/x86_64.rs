//! x86_64 probe emitter
//!
//! Emits the SystemTap SDT note layout: a one-byte `nop` landing pad in the
//! instruction stream and a `.note.stapsdt` entry (type 3, vendor "stapsdt")
//! recording the pad address, the link-time relocation base, the semaphore
//! address (or 0), and the provider/name/argument strings.
//!
//! Arguments are pinned in general-purpose registers across the pad and
//! described as signed register-width operands (`-8@%reg`). AT&T syntax is
//! forced so the rendered register names match what SDT consumers parse.
//!
//! The `_.stapsdt.base` symbol is emitted once per object into a COMDAT
//! section; tracers use it to undo load-bias when resolving pad addresses.
//!
//! The asm block must stay invisible to the surrounding code: no memory
//! writes, no stack adjustment, no flag clobbers.

/// Emit one probe site. Entry patterns:
///
/// - `@probe name, "argtmpl", args...` - no semaphore, note field 0
/// - `@probe_sema name, "argtmpl", args...` - note carries the address of the
///   semaphore static `name` (must be in scope)
///
/// The argument template literal is supplied by the arity dispatch in
/// `markers.rs` and must contain exactly one `-8@{}` token per argument.
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
                options(readonly, nostack, preserves_flags, att_syntax)
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
                options(readonly, nostack, preserves_flags, att_syntax)
            );
        }
    }};
}
