/*!
# Functions
*/

pub mod SQRT {
    /*!
    ## `sqrt(X)` Returns the square root of X as a float.
    ```text
    console.type(sqrt(16));
    4.0
    ```
    A negative X is an error.
    */
}

pub mod CBRT {
    /*!
    ## `cbrt(X)` Returns X raised to the power one third.
    ```text
    console.type(cbrt(27));
    3.0
    ```
    For a negative X the result is `nan`.
    */
}

pub mod ROUND {
    /*!
    ## `round(X)` Returns the nearest integer.
    Halfway values round to the even neighbour.
    ```text
    console.type(round(2.5));
    2
    console.type(round(3.5));
    4
    ```
    */
}

pub mod FLOOR {
    /*!
    ## `floor(X)` Returns the largest integer not greater than X.
    ```text
    console.type(floor(-1.5));
    -2
    ```
    */
}

pub mod CEILING {
    /*!
    ## `ceiling(X)` Returns the smallest integer not less than X.
    ```text
    console.type(ceiling(1.1));
    2
    ```
    */
}
