use crate::{Label, StateSet};

#[test]
fn state_set_equality_ignores_insertion_order() {
    let a: StateSet = [3, 1, 2].into_iter().collect();
    let mut b = StateSet::new();
    b.insert(2);
    b.insert(3);
    b.insert(1);

    assert_eq!(a, b);
    assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn state_set_insert_reports_novelty() {
    let mut set = StateSet::singleton(7);
    assert!(!set.insert(7));
    assert!(set.insert(8));
    assert_eq!(set.len(), 2);
    assert_eq!(set.first(), Some(7));
}

#[test]
fn state_set_intersects() {
    let a: StateSet = [1, 2, 3].into_iter().collect();
    let b: StateSet = [3, 4].into_iter().collect();
    let c: StateSet = [5].into_iter().collect();

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!StateSet::new().intersects(&a));
}

#[test]
fn state_set_display() {
    let set: StateSet = [4, 0, 2].into_iter().collect();
    assert_eq!(set.to_string(), "{0,2,4}");
    assert_eq!(StateSet::new().to_string(), "{}");
}

#[test]
fn epsilon_is_not_a_symbol() {
    assert!(Label::Epsilon.is_epsilon());
    assert_eq!(Label::Epsilon.symbol(), None);
    assert_eq!(Label::from('a').symbol(), Some('a'));
    assert_ne!(Label::Epsilon, Label::Symbol('ε'));
}

#[test]
fn label_display() {
    assert_eq!(Label::Symbol('a').to_string(), "a");
    assert_eq!(Label::Symbol('\n').to_string(), "\\n");
    assert_eq!(Label::Epsilon.to_string(), "ε");
}

#[test]
fn labels_sort_symbols_before_epsilon() {
    let mut labels = vec![Label::Epsilon, Label::Symbol('b'), Label::Symbol('a')];
    labels.sort();
    assert_eq!(
        labels,
        vec![Label::Symbol('a'), Label::Symbol('b'), Label::Epsilon]
    );
}
