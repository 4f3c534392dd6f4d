pub fn helper() -> i32 {
    42
}
