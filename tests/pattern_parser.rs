use weaver_router_rs::pattern::{PatternError, PatternNode, parse_pattern};

#[test]
fn parses_literal_and_parameter() {
    let ast = parse_pattern("/users/:id").expect("pattern should parse");
    assert_eq!(ast.to_string(), "/users/:id");
    assert_eq!(ast.names(), ["id"]);
    assert_eq!(ast.path_params(), ["id"]);
    assert!(!ast.is_glob());
}

#[test]
fn parses_optional_format_group() {
    let ast = parse_pattern("/users/:id(.:format)").expect("pattern should parse");
    assert_eq!(ast.to_string(), "/users/:id(.:format)");
    assert_eq!(ast.names(), ["id", "format"]);
    assert_eq!(ast.path_params(), ["id", "format"]);
}

#[test]
fn star_is_a_glob_and_not_a_path_param() {
    let ast = parse_pattern("/files/*rest").expect("pattern should parse");
    assert!(ast.is_glob());
    assert_eq!(ast.names(), ["rest"]);
    assert!(ast.path_params().is_empty());
}

#[test]
fn parses_alternation_in_declaration_order() {
    let ast = parse_pattern("/media/(photos|videos)/:id").expect("pattern should parse");
    assert_eq!(ast.to_string(), "/media/(photos|videos)/:id");
    let branches: Vec<usize> = ast
        .root()
        .iter()
        .filter_map(|node| match node {
            PatternNode::Or(children) => Some(children.len()),
            _ => None,
        })
        .collect();
    assert_eq!(branches, [2]);
}

#[test]
fn rejects_unbalanced_groups() {
    let err = parse_pattern("/a(/b").expect_err("unterminated group should fail");
    match err {
        PatternError::UnterminatedGroup { start, .. } => assert_eq!(start, 2),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_pattern("/a)/b").expect_err("stray ')' should fail");
    match err {
        PatternError::UnexpectedClosingParenthesis { index, .. } => assert_eq!(index, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_empty_group() {
    let err = parse_pattern("/a()").expect_err("empty group should fail");
    match err {
        PatternError::EmptyGroup { start, .. } => assert_eq!(start, 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_missing_or_malformed_names() {
    let err = parse_pattern("/:").expect_err("missing name should fail");
    match err {
        PatternError::MissingName { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_pattern("/files/*").expect_err("missing glob name should fail");
    assert!(matches!(err, PatternError::MissingName { .. }));

    let err = parse_pattern("/x/:9id").expect_err("digit-led name should fail");
    match err {
        PatternError::InvalidNameStart { name, found, .. } => {
            assert_eq!(name, "9id");
            assert_eq!(found, '9');
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_duplicate_dynamic_names() {
    let err = parse_pattern("/:id/:id").expect_err("duplicate name should fail");
    match err {
        PatternError::DuplicateName { name, .. } => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse_pattern("/files/*path/:path").expect_err("glob and symbol may not share a name");
    assert!(matches!(err, PatternError::DuplicateName { .. }));
}

#[test]
fn rejects_empty_pattern() {
    let err = parse_pattern("").expect_err("empty pattern should fail");
    assert!(matches!(err, PatternError::EmptyPattern));
}

#[test]
fn escapes_make_metacharacters_literal() {
    let ast = parse_pattern(r"/a\(b\)").expect("escaped parens should parse");
    assert!(
        ast.root()
            .iter()
            .any(|node| matches!(node, PatternNode::Literal(text) if text == "a(b)"))
    );
    assert_eq!(ast.to_string(), r"/a\(b\)");

    let err = parse_pattern("/a\\").expect_err("dangling escape should fail");
    assert!(matches!(err, PatternError::LoneEscape { .. }));
}

#[test]
fn empty_alternation_branch_parses_to_placeholder() {
    let ast = parse_pattern("/a(b|)").expect("empty branch should parse");
    assert!(
        ast.root()
            .iter()
            .any(|node| matches!(node, PatternNode::Dummy))
    );
}
