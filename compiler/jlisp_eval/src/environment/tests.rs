use super::*;

#[test]
fn test_define_lookup() {
    let mut env = Environment::new();
    env.define("x", Value::Number(42));
    assert_eq!(env.lookup("x"), Some(Value::Number(42)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_define_replaces() {
    let mut env = Environment::new();
    env.define("x", Value::Number(1));
    env.define("x", Value::Number(2));
    assert_eq!(env.len(), 1);
    assert_eq!(env.lookup("x"), Some(Value::Number(2)));
}

#[test]
fn test_parent_chain_lookup() {
    let parent = Env::new(Environment::new());
    parent.define_local("x", Value::Number(1));

    let child = Environment::with_parent(parent);
    assert!(!child.contains("x"));
    assert_eq!(child.lookup("x"), Some(Value::Number(1)));
}

#[test]
fn test_shadowing() {
    let parent = Env::new(Environment::new());
    parent.define_local("x", Value::Number(1));

    let mut child = Environment::with_parent(parent.clone());
    child.define("x", Value::Number(2));

    // Child's binding shadows parent's
    assert_eq!(child.lookup("x"), Some(Value::Number(2)));
    assert_eq!(parent.lookup("x"), Some(Value::Number(1)));
}

#[test]
fn test_lookup_returns_copy() {
    let env = Env::new(Environment::new());
    env.define_local("xs", Value::qexpr(vec![Value::Number(1)]));

    let Some(Value::QExpr(mut cells)) = env.lookup("xs") else {
        panic!("expected a list");
    };
    cells.push(Value::Number(2));

    assert_eq!(env.lookup("xs"), Some(Value::qexpr(vec![Value::Number(1)])));
}

#[test]
fn test_define_global_walks_to_root() {
    let root = Env::new(Environment::new());
    let middle = Env::new(Environment::with_parent(root.clone()));
    let inner = Env::new(Environment::with_parent(middle.clone()));

    inner.define_global("g", Value::Number(7));
    inner.define_local("l", Value::Number(8));

    assert!(root.borrow().contains("g"));
    assert!(!middle.borrow().contains("g"));
    assert!(inner.borrow().contains("l"));
    assert!(!root.borrow().contains("l"));
    assert!(inner.root().ptr_eq(&root));
}

#[test]
fn test_clone_is_deep_and_keeps_parent_link() {
    let parent = Env::new(Environment::new());
    let mut original = Environment::with_parent(parent.clone());
    original.define("x", Value::Number(1));

    let mut copy = original.clone();
    copy.define("x", Value::Number(99));
    copy.define("y", Value::Number(2));

    assert_eq!(original.lookup("x"), Some(Value::Number(1)));
    assert!(!original.contains("y"));
    assert!(copy.parent().is_some_and(|p| p.ptr_eq(&parent)));
}

#[test]
fn test_equality_ignores_parent() {
    let mut a = Environment::new();
    a.define("x", Value::Number(1));
    let mut b = Environment::with_parent(Env::new(Environment::new()));
    b.define("x", Value::Number(1));
    assert_eq!(a, b);
}

#[test]
fn test_names_sorted() {
    let mut env = Environment::new();
    env.define("b", Value::Number(1));
    env.define("a", Value::Number(2));
    assert_eq!(env.names(), vec!["a", "b"]);
}

#[test]
fn test_env_clone_shares_frame() {
    let env = Env::new(Environment::new());
    let alias = env.clone();

    alias.define_local("x", Value::Number(100));
    assert_eq!(env.lookup("x"), Some(Value::Number(100)));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&Env::new(Environment::new())));
}
