use crate::error::{Result, WeaveError};
use ristretto_classfile::{ClassAccessFlags, ClassFile, ConstantPool};
use std::io::Cursor;
use weaver_api::TypeDescription;
use weaver_api::models::class_name::binary_name;

/// Parses the header of a class file into a [`TypeDescription`].
///
/// `origin` names the class for error messages (an entry name or path).
pub fn parse_class_header(bytes: &[u8], origin: &str) -> Result<TypeDescription> {
    let class = ClassFile::from_bytes(&mut Cursor::new(bytes.to_vec())).map_err(|e| {
        WeaveError::ClassFormat {
            name: origin.to_string(),
            reason: format!("{e:?}"),
        }
    })?;

    let pool = &class.constant_pool;
    let name = class_name_at(pool, class.this_class, origin)?;
    let super_name = if class.super_class == 0 {
        None
    } else {
        Some(class_name_at(pool, class.super_class, origin)?)
    };
    let interfaces = class
        .interfaces
        .iter()
        .map(|index| class_name_at(pool, *index, origin))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeDescription {
        name,
        super_name,
        interfaces,
        is_abstract: class.access_flags.contains(ClassAccessFlags::ABSTRACT),
        is_interface: class.access_flags.contains(ClassAccessFlags::INTERFACE),
    })
}

fn class_name_at(pool: &ConstantPool, index: u16, origin: &str) -> Result<String> {
    pool.try_get_class(index)
        .map(|internal| binary_name(internal))
        .map_err(|e| WeaveError::ClassFormat {
            name: origin.to_string(),
            reason: format!("bad class reference #{index}: {e:?}"),
        })
}
