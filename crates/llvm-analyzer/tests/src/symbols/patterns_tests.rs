use super::*;

#[test]
fn define_splits_prefix_and_name() {
    let found = match_define("define dso_local i32 @add(i32 %a, i32 %b) #0 {").unwrap();
    assert_eq!(found.prefix, "define dso_local i32 ");
    assert_eq!(found.name, "@add");
    assert_eq!(found.name_columns(), (21, 25));
}

#[test]
fn define_accepts_quoted_and_punctuated_names() {
    assert_eq!(match_define(r#"define void @"quoted.name"(i8 %x) {"#).map(|m| m.name), Some(r#"@"quoted.name""#));
    assert_eq!(match_define("define internal void @_ZN3foo$bar.baz-1(i8 %x) {").map(|m| m.name), Some("@_ZN3foo$bar.baz-1"));
}

#[test]
fn define_requires_opening_brace() {
    assert!(match_define("define void @f(i32 %x)").is_none());
}

#[test]
fn declarations_are_not_headers() {
    assert!(match_define("declare i32 @printf(ptr, ...)").is_none());
}

#[test]
fn define_must_start_the_line() {
    assert!(match_define("  define void @f() {").is_none());
}

#[test]
fn define_needs_text_between_paren_and_brace() {
    assert!(match_define("define void @f({").is_none());
    assert!(match_define("define void @f(){").is_some());
}

#[test]
fn call_with_assignment() {
    let (kind, found) = match_reference("  %r = call i32 @add(i32 1, i32 2)").unwrap();
    assert_eq!(kind, ReferenceKind::Call);
    assert_eq!(found.prefix, "  %r = call i32 ");
    assert_eq!(found.name, "@add");
    assert_eq!(found.name_columns(), (16, 20));
}

#[test]
fn call_without_assignment() {
    let (kind, found) = match_reference("  tail call void @llvm.trap()").unwrap();
    assert_eq!(kind, ReferenceKind::Call);
    assert_eq!(found.name, "@llvm.trap");
}

#[test]
fn invoke_is_tried_after_call() {
    let (kind, found) = match_reference("  %x = invoke i32 @may_throw(i32 1) to label %ok unwind label %bad").unwrap();
    assert_eq!(kind, ReferenceKind::Invoke);
    assert_eq!(found.prefix, "  %x = invoke i32 ");
    assert_eq!(found.name, "@may_throw");
}

#[test]
fn plain_instructions_are_not_references() {
    assert!(match_reference("  %sum = add nsw i32 %a, %b").is_none());
    assert!(match_reference("  ret i32 %sum").is_none());
    assert!(match_reference("  store ptr @global, ptr %p").is_none());
}

#[test]
fn reference_needs_argument_text() {
    assert!(match_reference("  call void @f(").is_none());
}

#[test]
fn name_columns_count_utf16_units() {
    let (_, found) = match_reference("  %é = call i32 @add(i32 1)").unwrap();
    assert_eq!(found.prefix.len(), 17);
    assert_eq!(found.name_columns(), (16, 20));
}

#[test]
fn names_stop_at_characters_outside_the_identifier_set() {
    assert!(match_define(r#"define void @"has space"(i8 %x) {"#).is_none());
}
