/*!
# Lists

## Purpose
Keep an ordered sequence of values under a name.

## Remarks
Lists have their own names, so a list and a variable may share one.

| Statement | Effect |
|-----------|--------|
| `create list("<name>");` | Make an empty list, emptying one that exists. |
| `append("<name>", <expression>);` | Add the value at the end. |
| `remove("<name>", <expression>);` | Remove the first equal element, if any. |
| `List <name> length();` | Print the number of elements. |
| `filter("<name>", <condition>);` | Keep only the elements for which the condition holds. |

In a `filter` condition `$$` stands for the element being tested.

## Example
```text
create list("a");
append("a", 1);
append("a", 2);
append("a", 3);
remove("a", 5);
filter("a", $$ > 1);
List a length();
2
```

*/
