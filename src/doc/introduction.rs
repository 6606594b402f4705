/*!
# Introductory Tutorial for Container

A container program is a plain text file. Run it by passing its name to
the executable, or `-` to read the program from standard input.

```text
$ container hello.ct
Hello World
```

Every program starts with the same line. It declares the main container
and everything after it belongs to that container until a matching
`End;` closes it.

```text
When container main(int):
console.type("Hello World");
End;
```

Statements end with a semicolon. Block headers such as `if`, `while` and
`def procedure` end with a colon, and the block they open runs up to its
own `End;` on a line by itself. Indentation means nothing, so indent as
you please.

```text
When container main(int):
def var count = 3;
while count > 0:
    console.type("count: " + count);
    def var count = count - 1;
End;
End;
```

Variables are made with `def var` and changed by defining them again.
There is no separate assignment. A name made with `def const` can never
be defined again.

Comments come in two forms. A line starting with `#` is ignored. A line
starting with `//` begins a region that lasts until a line starting
with `\\`.

```text
# a comment
//
    none of this runs
\\
```

A program may ask for input. When the prompt is not given on the command
line with `--input`, you are asked for it in the terminal.

```text
$ container --input "Your name?=Ada" greet.ct
```

Stop a running program with CTRL-C.

*/
