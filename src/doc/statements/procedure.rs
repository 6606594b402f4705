/*!
# `def procedure <name>:` ... `End;` and `call <name>;`

## Purpose
Store a block of statements under a name and run it on demand.

## Remarks
A procedure has no parameters, no local variables and no return value.
It works on the same variables and lists as everything else. The body
may contain any statement except another `def procedure`. A procedure
may call itself. `--max-depth` sets how deep calls may go, counting
each `if`, `else` and `while` block entered along the way.

## Example
```text
def procedure greet:
    console.type("hi");
End;
call greet;
call greet;
hi
hi
```

*/
