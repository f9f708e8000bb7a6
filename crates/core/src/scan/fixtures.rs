//! Hand-assembled class files for tests.

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;

/// Minimal class file (Java 8 format) with no fields, methods or attributes.
/// Names are internal names (`com/example/Foo`).
pub fn class_bytes(
    name: &str,
    super_name: Option<&str>,
    interfaces: &[&str],
    access: u16,
) -> Vec<u8> {
    let mut pool: Vec<u8> = Vec::new();
    let mut count: u16 = 0;
    let mut add_class = |pool: &mut Vec<u8>, class: &str| -> u16 {
        pool.push(1);
        pool.extend_from_slice(&(class.len() as u16).to_be_bytes());
        pool.extend_from_slice(class.as_bytes());
        count += 1;
        let utf8_index = count;
        pool.push(7);
        pool.extend_from_slice(&utf8_index.to_be_bytes());
        count += 1;
        count
    };

    let this_index = add_class(&mut pool, name);
    let super_index = super_name.map(|s| add_class(&mut pool, s)).unwrap_or(0);
    let interface_indexes: Vec<u16> =
        interfaces.iter().map(|i| add_class(&mut pool, *i)).collect();

    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];
    bytes.extend_from_slice(&(count + 1).to_be_bytes());
    bytes.extend_from_slice(&pool);
    bytes.extend_from_slice(&access.to_be_bytes());
    bytes.extend_from_slice(&this_index.to_be_bytes());
    bytes.extend_from_slice(&super_index.to_be_bytes());
    bytes.extend_from_slice(&(interface_indexes.len() as u16).to_be_bytes());
    for index in interface_indexes {
        bytes.extend_from_slice(&index.to_be_bytes());
    }
    // fields, methods, attributes
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    bytes
}

/// A public concrete class extending `super_name` (or `java/lang/Object`).
pub fn simple_class(name: &str, super_name: Option<&str>, interfaces: &[&str]) -> Vec<u8> {
    class_bytes(
        name,
        Some(super_name.unwrap_or("java/lang/Object")),
        interfaces,
        ACC_PUBLIC,
    )
}
