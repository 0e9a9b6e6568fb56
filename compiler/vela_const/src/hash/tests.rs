use vela_ir::ConvKind;

use super::*;
use crate::test_helpers::Tree;

#[test]
fn test_feed_is_a_wrapping_polynomial() {
    let t = Tree::new();
    let mut h = ArrayHash::new(t.env());
    h.feed(1);
    h.feed(2);
    assert_eq!(h.finish(), HASH_MULT + 2);

    h.feed(i64::MAX);
    let expected = (HASH_MULT + 2)
        .wrapping_mul(HASH_MULT)
        .wrapping_add(i64::MAX);
    assert_eq!(h.finish(), expected);
}

#[test]
fn test_literal_feeds_tag_and_text() {
    let mut t = Tree::new();
    let five = t.int(5);
    let yes = t.boolean(true);

    let mut expected = ArrayHash::new(t.env());
    expected.feed_str("int_const5");
    assert_eq!(calc_hash(t.env(), five), expected.finish());

    let mut expected = ArrayHash::new(t.env());
    expected.feed_str("true");
    assert_eq!(calc_hash(t.env(), yes), expected.finish());
}

#[test]
fn test_array_hash_matches_manual_feed_sequence() {
    let mut t = Tree::new();
    let one = t.int(1);
    let two = t.int(2);
    let key = t.string("x");
    let three = t.int(3);
    let pair = t.pair(key, three);
    let array = t.array(&[one, two, pair]);
    assert!(crate::is_const(t.env(), array));

    let mut expected = ArrayHash::new(t.env());
    expected.feed(3);
    expected.feed(HASH_MAGIC_BEGIN);
    expected.feed_str("int_const1");
    expected.feed_str("int_const2");
    expected.feed_str("stringx");
    expected.feed_str("=>");
    expected.feed_str("int_const3");
    expected.feed(HASH_MAGIC_END);

    assert_eq!(calc_hash(t.env(), array), expected.finish());
}

#[test]
fn test_operators_feed_their_tag_between_operands() {
    let mut t = Tree::new();
    let two = t.int(2);
    let three = t.int(3);
    let sum = t.binary(BinaryOp::Sub, two, three);
    let neg = t.unary(UnaryOp::Minus, sum);

    let mut expected = ArrayHash::new(t.env());
    expected.feed_str("-");
    expected.feed_str("int_const2");
    expected.feed_str("-");
    expected.feed_str("int_const3");
    assert_eq!(calc_hash(t.env(), neg), expected.finish());
}

#[test]
fn test_operands_are_ordered() {
    let mut t = Tree::new();
    let two = t.int(2);
    let three = t.int(3);
    let two_plus_three = t.binary(BinaryOp::Add, two, three);
    let three_plus_two = t.binary(BinaryOp::Add, three, two);
    assert_ne!(
        calc_hash(t.env(), two_plus_three),
        calc_hash(t.env(), three_plus_two)
    );
}

#[test]
fn test_equal_arrays_hash_equal_and_reordered_arrays_differ() {
    let mut t = Tree::new();
    let a1 = t.int(1);
    let a2 = t.int(2);
    let first = t.array(&[a1, a2]);
    let b1 = t.int(1);
    let b2 = t.int(2);
    let same = t.array(&[b1, b2]);
    let reordered = t.array(&[b2, b1]);

    let env = t.env();
    assert_eq!(calc_hash(env, first), calc_hash(env, same));
    assert_ne!(calc_hash(env, first), calc_hash(env, reordered));
}

#[test]
fn test_repeated_hashing_is_deterministic() {
    let mut t = Tree::new();
    let one = t.int(1);
    let nested = t.array(&[one]);
    let key = t.string("k");
    let pair = t.pair(key, nested);
    let array = t.array(&[pair, one]);

    let first = calc_hash(t.env(), array);
    for _ in 0..5 {
        assert_eq!(calc_hash(t.env(), array), first);
    }
}

#[test]
fn test_conversions_and_references_are_transparent() {
    let mut t = Tree::new();
    let seven = t.int(7);
    let conv = t.conv(ConvKind::Int, seven);
    let answer = t.constant("ANSWER", conv);
    let answer_ref = t.var_ref(answer);
    let define = t.define("SEVEN", seven);
    let in_array = t.array(&[answer_ref, define]);
    let plain = t.array(&[seven, seven]);

    let env = t.env();
    let expected = calc_hash(env, seven);
    assert_eq!(calc_hash(env, conv), expected);
    assert_eq!(calc_hash(env, answer_ref), expected);
    assert_eq!(calc_hash(env, define), expected);
    assert_eq!(calc_hash(env, in_array), calc_hash(env, plain));
}

#[test]
fn test_value_kinds_are_distinguished() {
    let mut t = Tree::new();
    let int_one = t.int(1);
    let str_one = t.string("1");
    let float_one = t.float("1");
    let env = t.env();
    assert_ne!(calc_hash(env, int_one), calc_hash(env, str_one));
    assert_ne!(calc_hash(env, int_one), calc_hash(env, float_one));
}

#[test]
#[should_panic(expected = "internal compiler error")]
fn test_non_constant_variable_is_fatal() {
    let mut t = Tree::new();
    let runtime = t.runtime("x");
    let x = t.var_ref(runtime);
    assert!(!crate::is_const(t.env(), x));
    calc_hash(t.env(), x);
}

#[test]
#[should_panic(expected = "unsupported type for hashing: func_call")]
fn test_unsupported_kind_is_fatal() {
    let mut t = Tree::new();
    let call = t.call("f", &[]);
    let array = t.array(&[call]);
    calc_hash(t.env(), array);
}

#[test]
#[should_panic(expected = "internal compiler error")]
fn test_cyclic_constant_is_fatal() {
    let mut t = Tree::new();
    let a = t.constant("A", ExprId::INVALID);
    let a_ref = t.var_ref(a);
    t.symbols.set_init_val(a, a_ref);
    calc_hash(t.env(), a_ref);
}

#[test]
fn test_long_alias_chain_hashes_like_its_value() {
    let mut t = Tree::new();
    let seven = t.int(7);
    let outer = t.alias_chain(70, seven);
    let through_chain = t.array(&[outer]);
    let other_seven = t.int(7);
    let direct = t.array(&[other_seven]);

    assert!(crate::is_const(t.env(), through_chain));
    assert_eq!(calc_hash(t.env(), through_chain), calc_hash(t.env(), direct));
}

#[test]
fn test_large_lookup_table_hashes_its_length() {
    let mut t = Tree::new();
    let one = t.int(1);
    let table = t.array(&vec![one; 70_000]);

    let mut expected = ArrayHash::new(t.env());
    expected.feed(70_000);
    expected.feed(HASH_MAGIC_BEGIN);
    for _ in 0..70_000 {
        expected.feed_str("int_const1");
    }
    expected.feed(HASH_MAGIC_END);
    assert_eq!(calc_hash(t.env(), table), expected.finish());
}
