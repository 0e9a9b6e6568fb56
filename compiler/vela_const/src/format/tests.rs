use pretty_assertions::assert_eq;
use vela_ir::ConvKind;

use super::*;
use crate::test_helpers::Tree;

#[test]
fn test_literals() {
    let mut t = Tree::new();
    let five = t.int(5);
    let s = t.string("abc");
    let half = t.float("0.5");
    let yes = t.boolean(true);
    let null = t.null();

    let env = t.env();
    assert_eq!(to_string(env, five), "5:int_const");
    assert_eq!(to_string(env, s), "abc:string");
    assert_eq!(to_string(env, half), "0.5:float_const");
    assert_eq!(to_string(env, yes), "true");
    assert_eq!(to_string(env, null), "null");
}

#[test]
fn test_binary_is_parenthesized() {
    let mut t = Tree::new();
    let two = t.int(2);
    let three = t.int(3);
    let sum = t.binary(BinaryOp::Add, two, three);
    let shifted = t.binary(BinaryOp::Shl, sum, two);

    assert!(crate::is_const(t.env(), sum));
    assert_eq!(to_string(t.env(), sum), "(2:int_const+3:int_const)");
    assert_eq!(
        to_string(t.env(), shifted),
        "((2:int_const+3:int_const)<<2:int_const)"
    );
}

#[test]
fn test_unary_puts_the_operator_last() {
    let mut t = Tree::new();
    let five = t.int(5);
    let neg = t.unary(UnaryOp::Minus, five);
    let not = t.unary(UnaryOp::Not, neg);
    assert_eq!(to_string(t.env(), not), "5:int_const:-:!");
}

#[test]
fn test_conversions_are_transparent() {
    let mut t = Tree::new();
    let five = t.int(5);
    let conv = t.conv(ConvKind::String, five);
    assert_eq!(to_string(t.env(), conv), "5:int_const");
}

#[test]
fn test_array_keeps_trailing_separator() {
    let mut t = Tree::new();
    let one = t.int(1);
    let key = t.string("x");
    let three = t.int(3);
    let pair = t.pair(key, three);
    let array = t.array(&[one, pair]);
    let empty = t.array(&[]);

    assert_eq!(
        to_string(t.env(), array),
        "1:int_const, x:string=>3:int_const, "
    );
    assert_eq!(to_string(t.env(), empty), "");
}

#[test]
fn test_references_render_their_value() {
    let mut t = Tree::new();
    let seven = t.int(7);
    let answer = t.constant("ANSWER", seven);
    let answer_ref = t.var_ref(answer);
    let pi = t.float("3.14");
    let pi_define = t.define("PI", pi);
    let array = t.array(&[answer_ref, pi_define]);

    let env = t.env();
    assert_eq!(to_string(env, answer_ref), "7:int_const");
    assert_eq!(to_string(env, pi_define), "3.14:float_const");
    assert_eq!(to_string(env, array), "7:int_const, 3.14:float_const, ");
}

#[test]
fn test_define_inside_operator_is_resolved() {
    let mut t = Tree::new();
    let pi = t.float("3.14");
    let pi_define = t.define("PI", pi);
    let two = t.int(2);
    let tau = t.binary(BinaryOp::Mul, two, pi_define);
    assert_eq!(to_string(t.env(), tau), "(2:int_const*3.14:float_const)");
}

#[test]
fn test_unresolved_variables_and_properties() {
    let mut t = Tree::new();
    let runtime = t.runtime("x");
    let x = t.var_ref(runtime);
    let prop = t.instance_prop(x, "len");
    let fname = t.func_name("PHP_EOL");

    let env = t.env();
    assert_eq!(to_string(env, x), "xvar");
    assert_eq!(to_string(env, prop), "xvar->len");
    assert_eq!(to_string(env, fname), "PHP_EOLfunc_name");
}

#[test]
fn test_formatting_is_stable() {
    let mut t = Tree::new();
    let one = t.int(1);
    let inner = t.array(&[one, one]);
    let key = t.string("k");
    let pair = t.pair(key, inner);
    let array = t.array(&[pair]);

    let first = to_string(t.env(), array);
    assert_eq!(first, "k:string=>1:int_const, 1:int_const, , ");
    for _ in 0..3 {
        assert_eq!(to_string(t.env(), array), first);
    }
}

#[test]
#[should_panic(expected = "unsupported type for formatting: concat")]
fn test_unsupported_kind_is_fatal() {
    let mut t = Tree::new();
    let a = t.string("a");
    let concat = t.concat(&[a, a]);
    to_string(t.env(), concat);
}
