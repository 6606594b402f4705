/*!
# Expressions and Values

A value is an integer, a float or a string. Variables carry no type and
may hold any of them over their lifetime.

```text
def var a = 42;
def var b = 2.5;
def var c = "text";
```

Floats print with a decimal point, even when whole. Below `0.0001` or
from `1e16` up they switch to exponent form.

```text
console.type(7 / 7);
1.0
console.type(1 / 100000);
1e-05
```

## Operators

Operators are few and their precedence is unusual. From loosest to
tightest binding:

| Operator | Meaning |
|----------|---------|
| `+`      | Joins the printed form of every part into a string |
| `**`     | Power |
| `*`      | Multiplication |
| `/`      | Division, always a float |
| `-`      | Subtraction |

There is no numeric addition. `+` always builds a string.

```text
console.type(2 + 3);
23
```

Each level groups to the right, so a chain of the same operator is
evaluated from its right end.

```text
console.type(2 - 3 - 1);
0
console.type(2 * 3 - 1);
4
```

Use parentheses when you want something else.

```text
console.type((2 - 3) - 1);
-2
```

Two integers give an integer for `-`, `*` and `**` with a non-negative
exponent. An integer result too large to hold is an error. Strings are
never converted to numbers, so `"3" - 1` is an error.

## Conditions

`if` and `while` take a condition. A condition compares two expressions
with one of `==`, `!=`, `>=`, `<=`, `>` or `<`, or is a single
expression that is false when it is `0`, `0.0` or the empty string.
Prefix `not` to negate.

```text
if not count > 10:
    console.type("small");
End;
```

Numbers compare with numbers and strings with strings. Asking whether a
string is equal to a number is simply false, but asking which is larger
is an error.

*/
