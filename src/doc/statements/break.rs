/*!
# `break;` and `skip;`

## Purpose
Leave the nearest enclosing `while`, or skip to its next condition check.

## Remarks
Both must be inside a `while` of the same procedure or main container.
A loop in the caller does not count.

## Example
```text
def var i = 0;
while 1:
    def var i = i - 0 - 1;
    if i == 2:
        skip;
    End;
    if i > 3:
        break;
    End;
    console.type(i);
End;
1
3
```

*/
