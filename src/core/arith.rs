use std::ops::Add;

pub fn simple_add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
