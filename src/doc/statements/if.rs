/*!
# `if <condition>:` ... `End;` `else:` ... `End;`

## Purpose
Run a block only when the condition holds.

## Remarks
An `else:` block placed directly after the `End;` of an `if` runs when
the condition did not hold. There is no `elif`; nest another `if`
inside the `else:` instead.

## Example
```text
def var n = 7;
if n > 5:
    console.type("big");
End;
else:
    console.type("small");
End;
big
```

*/
