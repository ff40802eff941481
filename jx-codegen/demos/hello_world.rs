//! Walks a generic type apart and back together, then prints a generated
//! `HelloWorld` class.
//!
//! ```sh
//! cargo run -p jx-codegen --example hello_world
//! ```

use std::io;

use jx_codegen::{JavaFile, MethodSpec, Modifier, TypeSpec, args};
use jx_model::{AssembleMode, ClassName, TypeName};

fn main() -> eyre::Result<()> {
    let live_data = "androidx.lifecycle.LiveData<java.util.List<java.lang.String>>";
    let string = TypeName::of::<String>();
    let activity = ClassName::new("com.zeoflow.app", "Activity");

    println!("{}", string.contains(&string));
    println!("{}", TypeName::parse(live_data)?.contains(&string));
    println!("{}", TypeName::parse("androidx.lifecycle.Observer")?.contains(&string));

    let mut peeled = TypeName::parse(live_data)?;
    for _ in 0..4 {
        peeled = peeled.disassemble();
    }
    println!("{peeled}");

    let wrapped = TypeName::parse(live_data)?
        .assemble("java.lang.String")?
        .assemble(&string)?;
    println!("{wrapped}");
    println!("{}", string.assemble_with(&activity, AssembleMode::Replace)?);
    println!("{}", string.assemble_with(&activity, AssembleMode::Wrap)?);

    let system = ClassName::new("java.lang", "System");

    let main = MethodSpec::method_builder("main")
        .add_modifiers([Modifier::Public, Modifier::Static])
        .returns(TypeName::Void)
        .add_param(TypeName::array(string.clone()), "args")
        .add_statement("$T.out.println($S)", args![&system, "Hello, JavaPoet!"])
        .add_statement("String<T> name", args![])
        .build()?;

    let get_obs = MethodSpec::method_builder("getObs")
        .add_modifiers([Modifier::Public])
        .returns(TypeName::Void)
        .add_param("com.Observable<T>", "args")
        .add_statement("$T.out.println($S)", args![&system, "Hello, JavaPoet!"])
        .add_statement("String<T> name", args![])
        .build()?;

    let hello_world = TypeSpec::class_builder("HelloWorld<Text, View>")
        .add_modifiers([Modifier::Public, Modifier::Final])
        .add_method(main)
        .add_method(get_obs)
        .build()?;

    let file = JavaFile::builder("com.example.helloworld", hello_world).build()?;
    file.write_to(&mut io::stdout())?;
    Ok(())
}
