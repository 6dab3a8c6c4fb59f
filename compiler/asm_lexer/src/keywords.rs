//! Identifier classification.
//!
//! Four fixed, case-sensitive vocabularies, checked in priority order:
//!
//! 1. **Mnemonics** → [`Category::Keyword`]
//! 2. **Registers** → [`Category::Variable`]
//! 3. **Size/type keywords** → [`Category::Type`]
//! 4. **Directives** → [`Category::Macro`]
//!
//! Anything else is [`Category::Unknown`], a label candidate. Because reserved
//! words win before the label check ever runs, `eax:` is a register followed
//! by a colon, never a label declaration.
//!
//! Each table is a byte-wise sorted slice so lookup is a binary search; the
//! tests keep the tables sorted and disjoint.

use asm_ir::Category;

/// Instruction mnemonics (x86, NASM spelling).
pub const MNEMONICS: &[&str] = &[
    "adc", "add", "and", "bsf", "bsr", "bswap", "bt", "btc", "btr", "bts", "call", "cbw", "cdq",
    "cdqe", "clc", "cld", "cli", "cmc", "cmova", "cmovae", "cmovb", "cmovbe", "cmove", "cmovg",
    "cmovge", "cmovl", "cmovle", "cmovne", "cmp", "cmpsb", "cmpsd", "cmpsw", "cmpxchg", "cpuid",
    "cqo", "cwd", "cwde", "dec", "div", "enter", "hlt", "idiv", "imul", "in", "inc", "int", "int3",
    "into", "iret", "iretq", "ja", "jae", "jb", "jbe", "jc", "jcxz", "je", "jecxz", "jg", "jge",
    "jl", "jle", "jmp", "jna", "jnae", "jnb", "jnbe", "jnc", "jne", "jng", "jnge", "jnl", "jnle",
    "jno", "jnp", "jns", "jnz", "jo", "jp", "jpe", "jpo", "jrcxz", "js", "jz", "lahf", "lea",
    "leave", "lock", "lodsb", "lodsd", "lodsq", "lodsw", "loop", "loope", "loopne", "loopnz",
    "loopz", "mov", "movsb", "movsd", "movsq", "movsw", "movsx", "movsxd", "movzx", "mul", "neg",
    "nop", "not", "or", "out", "pause", "pop", "popa", "popf", "popfq", "push", "pusha", "pushf",
    "pushfq", "rcl", "rcr", "rdtsc", "rep", "repe", "repne", "repnz", "repz", "ret", "retf",
    "retn", "rol", "ror", "sahf", "sal", "sar", "sbb", "scasb", "scasd", "scasq", "scasw", "seta",
    "setae", "setb", "setbe", "sete", "setg", "setge", "setl", "setle", "setne", "setnz", "setz",
    "shl", "shld", "shr", "shrd", "stc", "std", "sti", "stosb", "stosd", "stosq", "stosw", "sub",
    "syscall", "sysenter", "sysexit", "sysret", "test", "ud2", "xadd", "xchg", "xlat", "xor",
];

/// General purpose, segment, control and SSE register names.
pub const REGISTERS: &[&str] = &[
    "ah", "al", "ax", "bh", "bl", "bp", "bpl", "bx", "ch", "cl", "cr0", "cr2", "cr3", "cr4", "cs",
    "cx", "dh", "di", "dil", "dl", "ds", "dx", "eax", "ebp", "ebx", "ecx", "edi", "edx", "eip",
    "es", "esi", "esp", "fs", "gs", "ip", "r10", "r10b", "r10d", "r10w", "r11", "r11b", "r11d",
    "r11w", "r12", "r12b", "r12d", "r12w", "r13", "r13b", "r13d", "r13w", "r14", "r14b", "r14d",
    "r14w", "r15", "r15b", "r15d", "r15w", "r8", "r8b", "r8d", "r8w", "r9", "r9b", "r9d", "r9w",
    "rax", "rbp", "rbx", "rcx", "rdi", "rdx", "rip", "rsi", "rsp", "si", "sil", "sp", "spl", "ss",
    "xmm0", "xmm1", "xmm10", "xmm11", "xmm12", "xmm13", "xmm14", "xmm15", "xmm2", "xmm3", "xmm4",
    "xmm5", "xmm6", "xmm7", "xmm8", "xmm9",
];

/// Operand size and distance keywords.
pub const TYPE_KEYWORDS: &[&str] = &[
    "byte", "dword", "far", "near", "oword", "ptr", "qword", "short", "tword", "word", "yword",
    "zword",
];

/// Assembler directives and data declarations.
pub const DIRECTIVES: &[&str] = &[
    "absolute", "align", "alignb", "at", "bits", "common", "cpu", "db", "dd", "default", "dq",
    "dt", "dw", "endstruc", "equ", "extern", "global", "iend", "incbin", "istruc", "org", "resb",
    "resd", "resq", "rest", "resw", "section", "segment", "struc", "times", "use16", "use32",
    "use64",
];

#[inline]
fn contains(table: &[&str], text: &str) -> bool {
    table.binary_search(&text).is_ok()
}

pub fn is_mnemonic(text: &str) -> bool {
    contains(MNEMONICS, text)
}

pub fn is_register(text: &str) -> bool {
    contains(REGISTERS, text)
}

pub fn is_type_keyword(text: &str) -> bool {
    contains(TYPE_KEYWORDS, text)
}

pub fn is_directive(text: &str) -> bool {
    contains(DIRECTIVES, text)
}

/// Classify an identifier's exact text.
///
/// Returns [`Category::Unknown`] for identifiers outside every vocabulary.
/// The check order is fixed; see the module docs.
pub fn classify(text: &str) -> Category {
    if is_mnemonic(text) {
        Category::Keyword
    } else if is_register(text) {
        Category::Variable
    } else if is_type_keyword(text) {
        Category::Type
    } else if is_directive(text) {
        Category::Macro
    } else {
        Category::Unknown
    }
}

#[cfg(test)]
mod tests;
