/*!
# `while <condition>:` ... `End;`

## Purpose
Run a block for as long as the condition holds.

## Remarks
The condition is checked before every pass, so a loop whose condition
is false from the start never runs its body.

## Example
```text
def var i = 3;
while i > 0:
    console.type(i);
    def var i = i - 1;
End;
3
2
1
```

*/
