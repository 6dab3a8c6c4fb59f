use super::*;
use pretty_assertions::assert_eq;

fn assert_sorted_unique(name: &str, table: &[&str]) {
    for pair in table.windows(2) {
        assert!(pair[0] < pair[1], "{name} not sorted at {:?}", pair);
    }
}

#[test]
fn tables_are_sorted_for_binary_search() {
    assert_sorted_unique("MNEMONICS", MNEMONICS);
    assert_sorted_unique("REGISTERS", REGISTERS);
    assert_sorted_unique("TYPE_KEYWORDS", TYPE_KEYWORDS);
    assert_sorted_unique("DIRECTIVES", DIRECTIVES);
}

#[test]
fn tables_are_disjoint() {
    let tables = [MNEMONICS, REGISTERS, TYPE_KEYWORDS, DIRECTIVES];
    for (i, a) in tables.iter().enumerate() {
        for b in &tables[i + 1..] {
            for word in *a {
                assert!(!b.contains(word), "{word} appears in two vocabularies");
            }
        }
    }
}

#[test]
fn every_entry_is_a_lexable_identifier() {
    for table in [MNEMONICS, REGISTERS, TYPE_KEYWORDS, DIRECTIVES] {
        for word in table {
            let first = word.as_bytes()[0];
            assert!(first.is_ascii_alphabetic() || first == b'_', "{word}");
            assert!(word.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_'));
        }
    }
}

#[test]
fn mnemonics_are_keywords() {
    assert_eq!(classify("mov"), Category::Keyword);
    assert_eq!(classify("cmp"), Category::Keyword);
    assert_eq!(classify("jmp"), Category::Keyword);
    assert_eq!(classify("syscall"), Category::Keyword);
}

#[test]
fn registers_are_variables() {
    assert_eq!(classify("eax"), Category::Variable);
    assert_eq!(classify("r15d"), Category::Variable);
    assert_eq!(classify("xmm7"), Category::Variable);
}

#[test]
fn size_keywords_are_types() {
    assert_eq!(classify("byte"), Category::Type);
    assert_eq!(classify("qword"), Category::Type);
    assert_eq!(classify("ptr"), Category::Type);
}

#[test]
fn directives_are_macros() {
    assert_eq!(classify("section"), Category::Macro);
    assert_eq!(classify("global"), Category::Macro);
    assert_eq!(classify("db"), Category::Macro);
}

#[test]
fn everything_else_is_unknown() {
    assert_eq!(classify("foo"), Category::Unknown);
    assert_eq!(classify("_start"), Category::Unknown);
    assert_eq!(classify("loop_top"), Category::Unknown);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(classify("MOV"), Category::Unknown);
    assert_eq!(classify("Eax"), Category::Unknown);
    assert_eq!(classify("SECTION"), Category::Unknown);
}

#[test]
fn predicates_agree_with_classify() {
    assert!(is_mnemonic("ret") && !is_register("ret"));
    assert!(is_register("rsp") && !is_mnemonic("rsp"));
    assert!(is_type_keyword("dword") && !is_directive("dword"));
    assert!(is_directive("equ") && !is_type_keyword("equ"));
}
