/*!
# `console.type(<expression>);`

## Purpose
Print the value of an expression followed by a line break.

## Example
```text
console.type("total: " + 2 * 3);
total: 6
```

*/
