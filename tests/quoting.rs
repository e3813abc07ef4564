mod cases;

test_case! {
    name: quoted_list_is_a_value,
    input: "{1 2 3}",
    read: { Ok("({1.000000 2.000000 3.000000})") },
    evaluated: { Ok("{1.000000 2.000000 3.000000}") },
}

test_case! {
    name: quoted_operator_is_not_applied,
    input: "{+ 1 2}",
    evaluated: { Ok("{+ 1.000000 2.000000}") },
}

test_case! {
    name: quoted_division_by_zero_is_harmless,
    input: "{(/ 1 0)}",
    evaluated: { Ok("{(/ 1.000000 0.000000)}") },
}

test_case! {
    name: empty_quote,
    input: "{}",
    read: { Ok("({})") },
    evaluated: { Ok("{}") },
}

test_case! {
    name: nested_quotes,
    input: "{1 {2 {3}}}",
    evaluated: { Ok("{1.000000 {2.000000 {3.000000}}}") },
}

test_case! {
    name: quote_inside_expression,
    input: "(+ 1 {2})",
    read: { Ok("((+ 1.000000 {2.000000}))") },
    evaluated: { Ok("Error: type mismatch") },
}

test_case! {
    name: symbols_alone_in_quote,
    input: "{+ - * /}",
    evaluated: { Ok("{+ - * /}") },
}
