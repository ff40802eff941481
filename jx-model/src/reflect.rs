//! Type descriptors derived from Rust types.
//!
//! [`Reflect`] maps a Rust type onto the Java type it is represented by,
//! resolving generic arguments recursively. The result equals parsing the
//! canonical string of the same Java type.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{ClassName, PrimitiveType, TypeName};

/// A Rust type with a Java counterpart.
///
/// Implement this for your own types to use them wherever a native type is
/// accepted:
///
/// ```
/// use jx_model::{Reflect, TypeName};
///
/// struct Activity;
///
/// impl Reflect for Activity {
///     fn type_name() -> TypeName {
///         TypeName::named("com.zeoflow.app.Activity")
///     }
/// }
///
/// let ty = TypeName::of::<Vec<Activity>>();
/// assert_eq!(ty.to_string(), "java.util.List<com.zeoflow.app.Activity>");
/// ```
pub trait Reflect {
    fn type_name() -> TypeName;
}

impl TypeName {
    /// The descriptor of the Java type that `T` maps to.
    pub fn of<T: Reflect + ?Sized>() -> TypeName {
        T::type_name()
    }
}

/// Generic arguments must be reference types.
fn argument<T: Reflect + ?Sized>() -> TypeName {
    T::type_name().boxed()
}

fn generic(package: &str, simple: &str, arguments: Vec<TypeName>) -> TypeName {
    TypeName::parameterized(ClassName::new(package, simple), arguments)
}

macro_rules! reflect_primitive {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_name() -> TypeName {
                    TypeName::Primitive(PrimitiveType::$primitive)
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => Boolean,
    i8 => Byte,
    u8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    char => Char,
    f32 => Float,
    f64 => Double,
}

impl Reflect for () {
    fn type_name() -> TypeName {
        TypeName::Void
    }
}

impl Reflect for str {
    fn type_name() -> TypeName {
        TypeName::Class(ClassName::string())
    }
}

impl Reflect for String {
    fn type_name() -> TypeName {
        TypeName::Class(ClassName::string())
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_name() -> TypeName {
        T::type_name()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn type_name() -> TypeName {
        T::type_name()
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_name() -> TypeName {
        TypeName::array(T::type_name())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_name() -> TypeName {
        TypeName::array(T::type_name())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_name() -> TypeName {
        generic("java.util", "List", vec![argument::<T>()])
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_name() -> TypeName {
        generic("java.util", "Optional", vec![argument::<T>()])
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_name() -> TypeName {
        generic("java.util", "Set", vec![argument::<T>()])
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn type_name() -> TypeName {
        generic("java.util", "SortedSet", vec![argument::<T>()])
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_name() -> TypeName {
        generic("java.util", "Map", vec![argument::<K>(), argument::<V>()])
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_name() -> TypeName {
        generic("java.util", "SortedMap", vec![argument::<K>(), argument::<V>()])
    }
}
