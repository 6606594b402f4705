/*!
# Errors

The first error stops the program. Whatever was printed before it is
kept and the error follows, naming the line where it happened.

```text
Division by zero (line 4)
```

| Error | Cause |
|-------|-------|
| Program must start with When container main(int): | The first line is not the entry header. |
| Unknown statement | No statement has this shape. |
| Syntax error | The statement was recognised but is malformed. |
| Invalid expression | An expression or condition could not be parsed, or `$$` was used outside `filter`. |
| Variable not defined | A name was used before its `def`. |
| List not defined | A list was used before `create list`. |
| Procedure not defined | `call` named a procedure that was never defined. |
| Type mismatch | Arithmetic on a string, or ordering a string against a number. |
| Division by zero | The divisor was zero. |
| Numeric overflow | An integer result does not fit. |
| Math domain error | `sqrt` of a negative number. |
| Constant cannot be redefined | A second `def` of a `const`. |
| Block is missing its End; | An `if`, `while`, `else` or procedure has no matching `End;`. |
| Procedure definitions cannot be nested | `def procedure` inside another procedure. |
| break or skip outside of a while loop | Also raised inside a procedure called from a loop. |
| else without a preceding if | `else:` must directly follow the `End;` of an `if`. |
| Procedure calls nested too deeply | Runaway recursion. Blocks entered inside each call count too. See `--max-depth`. |
| Expression nested too deeply | An expression has too many operators in a chain, or too many nested parentheses. |
| Step limit exceeded | The run took more steps than `--max-steps` allows. |
| Interrupted | CTRL-C. |

*/
