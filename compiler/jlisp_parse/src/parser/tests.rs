use super::*;
use pretty_assertions::assert_eq;

fn exprs(node: &AstNode) -> Vec<&AstNode> {
    node.exprs().collect()
}

#[test]
fn test_root_has_anchors() {
    let root = parse("<test>", "1 2").unwrap();
    assert_eq!(root.tag, Tag::Root);
    assert_eq!(root.children.len(), 4);
    assert_eq!(root.children[0].tag, Tag::Anchor);
    assert_eq!(root.children[3].tag, Tag::Anchor);
    let items = exprs(&root);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].tag, Tag::Number);
    assert_eq!(items[0].contents, "1");
}

#[test]
fn test_empty_input() {
    let root = parse("<test>", "").unwrap();
    assert_eq!(root.tag, Tag::Root);
    assert!(exprs(&root).is_empty());
}

#[test]
fn test_sexpr_keeps_punctuation() {
    let root = parse("<test>", "(+ 1 2)").unwrap();
    let sexpr = exprs(&root)[0];
    assert_eq!(sexpr.tag, Tag::SExpr);
    let tags: Vec<Tag> = sexpr.children.iter().map(|c| c.tag).collect();
    assert_eq!(
        tags,
        vec![Tag::Punct, Tag::Symbol, Tag::Number, Tag::Number, Tag::Punct]
    );
    assert_eq!(sexpr.children[0].contents, "(");
    assert_eq!(sexpr.children[4].contents, ")");
    assert_eq!(sexpr.span, Span::new(0, 7));
}

#[test]
fn test_nested_qexpr() {
    let root = parse("<test>", "{a {b c} ()}").unwrap();
    let qexpr = exprs(&root)[0];
    assert_eq!(qexpr.tag, Tag::QExpr);
    let inner = exprs(qexpr);
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0].tag, Tag::Symbol);
    assert_eq!(inner[1].tag, Tag::QExpr);
    assert_eq!(inner[2].tag, Tag::SExpr);
    assert!(exprs(inner[2]).is_empty());
}

#[test]
fn test_unclosed_bracket() {
    let err = parse("<stdin>", "(+ 1 {2").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Unclosed { expected: '}' });
    assert_eq!(err.to_string(), "<stdin>:1:8: error: expected '}' but found end of input");
}

#[test]
fn test_stray_close() {
    let err = parse("<stdin>", "1 )").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedClose { found: ')' });
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn test_mismatched_close() {
    let err = parse("<stdin>", "(+ 1 2}").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedClose {
            expected: ')',
            found: '}'
        }
    );
}

#[test]
fn test_tree_dump() {
    let root = parse("<test>", "(- 5)").unwrap();
    let dump = root.to_string();
    let expected = "\
>
  regex: ''
  sexpr
    char: '('
    symbol: '-'
    number: '5'
    char: ')'
  regex: ''
";
    assert_eq!(dump, expected);
}

#[test]
fn test_deep_nesting() {
    let depth = 100_000;
    let source = format!("{}x{}", "{".repeat(depth), "}".repeat(depth));
    let root = parse("<test>", &source).unwrap();

    let mut node = root.exprs().next().unwrap();
    let mut levels = 0;
    while node.tag == Tag::QExpr {
        node = node.exprs().next().unwrap();
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(node.contents, "x");
}
