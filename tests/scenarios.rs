//! Classification scenarios over the public API: keywords, first sight,
//! prefix sharing, duplicates and the capacity cap.

use dynfsa::{
    Error,
    fsa::{Insertion, Machine, Marker, Outcome},
    lexer::{load_reserved, scan},
};

fn reserved(words: &[&str]) -> Machine {
    let mut m = Machine::new();
    for w in words {
        m.insert(w, Marker::Reserved).unwrap();
    }
    m
}

#[test]
fn classic_line_is_annotated() {
    let mut m = Machine::new();
    load_reserved(&mut m, "int class").unwrap();
    let t = scan(&mut m, "int x = class + x;").unwrap();
    let words: Vec<&str> = t.lines[0].iter().map(|a| a.word.as_str()).collect();
    assert_eq!(words, vec!["int", "x", "class", "x"]);
    assert_eq!(t.output(), "int* x? class* x@\n");
}

#[test]
fn for_and_form_both_stay_reserved() {
    let mut m = reserved(&["for", "form"]);
    let got: Vec<Outcome> = ["for", "form", "for"]
        .iter()
        .map(|w| m.classify(w).unwrap())
        .collect();
    assert_eq!(got, vec![Outcome::Reserved; 3]);
}

#[test]
fn form_then_for_in_reverse_order() {
    let mut m = reserved(&["form", "for"]);
    assert_eq!(m.classify("for").unwrap(), Outcome::Reserved);
    assert_eq!(m.classify("form").unwrap(), Outcome::Reserved);
    assert_eq!(m.classify("fort").unwrap(), Outcome::New);
}

#[test]
fn identifiers_are_new_once_then_repeated() {
    let mut m = reserved(&["if", "int", "interface"]);
    for w in ["i", "in", "inter", "integer", "iff", "interfaces", "_", "$"] {
        assert_eq!(m.classify(w).unwrap(), Outcome::New, "{w}");
        for _ in 0..3 {
            assert_eq!(m.classify(w).unwrap(), Outcome::Repeated, "{w}");
        }
    }
    for w in ["if", "int", "interface"] {
        assert_eq!(m.classify(w).unwrap(), Outcome::Reserved, "{w}");
    }
}

#[test]
fn keywords_never_become_repeated() {
    let java = "abstract assert boolean break byte case catch char class const \
                continue default do double else enum extends final finally float \
                for goto if implements import instanceof int interface long native \
                new package private protected public return short static strictfp \
                super switch synchronized this throw throws transient try void \
                volatile while";
    let mut m = Machine::new();
    let sum = load_reserved(&mut m, java).unwrap();
    assert_eq!(sum.inserted, java.split_whitespace().count());
    for _ in 0..3 {
        for w in java.split_whitespace() {
            assert_eq!(m.classify(w).unwrap(), Outcome::Reserved, "{w}");
        }
    }
}

#[test]
fn duplicate_keyword_does_not_disturb_neighbours() {
    let mut m = Machine::new();
    let sum = load_reserved(&mut m, "do double do done").unwrap();
    assert_eq!(sum.inserted, 3);
    assert_eq!(sum.duplicates, 1);
    assert_eq!(
        m.insert("double", Marker::Reserved).unwrap(),
        Insertion::Duplicate(Marker::Reserved)
    );
    for w in ["do", "double", "done"] {
        assert_eq!(m.classify(w).unwrap(), Outcome::Reserved, "{w}");
    }
    assert_eq!(m.classify("dou").unwrap(), Outcome::New);
}

#[test]
fn same_inputs_same_outcomes() {
    let run = || {
        let mut m = Machine::new();
        load_reserved(&mut m, "public static void main String").unwrap();
        let t = scan(
            &mut m,
            "public static void main(String[] args) {\n  String s = args[0];\n  main(args);\n}\n",
        )
        .unwrap();
        (t.output(), m.into_store())
    };
    let (a_out, a_store) = run();
    let (b_out, b_store) = run();
    assert_eq!(a_out, b_out);
    assert_eq!(a_store, b_store);
    assert_eq!(
        a_out,
        "public* static* void* main* String* args?\nString* s? args@\nmain* args@\n\n"
    );
}

#[test]
fn overflowing_the_cap_is_an_error_not_a_truncation() {
    let mut m = Machine::with_limit(Some(10));
    load_reserved(&mut m, "int class").unwrap(); // 3 + 5 cells
    let before = m.store().clone();

    let err = m.classify("abc").unwrap_err(); // needs b c ? = 3
    match err {
        Error::CapacityExceeded {
            needed,
            used,
            limit,
        } => assert_eq!((needed, used, limit), (3, 8, 10)),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(m.store(), &before);

    assert_eq!(m.classify("a").unwrap(), Outcome::New);
    assert_eq!(m.classify("int").unwrap(), Outcome::Reserved);
    assert_eq!(m.classify("class").unwrap(), Outcome::Reserved);
    assert_eq!(m.store().len(), 9);
}
