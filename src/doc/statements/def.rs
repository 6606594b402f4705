/*!
# `def var <name> = <expression>;`

## Purpose
Define a variable, or give an existing one a new value.

## Remarks
`def const` defines a name that can never be defined again. Names start
with a letter or underscore followed by letters, digits or underscores.
The right side may instead be `input from "<prompt>"`, which reads a
string for that prompt. A prompt with no value supplied reads as the
empty string.

## Example
```text
def var total = 10;
def var total = total - 4;
def const name = input from "Your name?";
console.type(name + " has " + total);
```

*/
