//! Java source for the generated plugin wrapper
//!
//! The output shape is fixed. Values are interpolated verbatim; nothing is
//! escaped, so option values must already be valid inside a Java string
//! literal.

use crate::declaration::ModuleDeclaration;
use crate::dependency::DependencyDescriptor;
use crate::descriptor::GeneratedDescriptor;

const COMMON_IMPORTS: &[&str] = &[
    "javax.inject.Inject",
    "com.google.inject.Injector",
    "org.spongepowered.api.plugin.Plugin",
    "org.spongepowered.api.plugin.Dependency",
    "org.cubeengine.libcube.CubeEnginePlugin",
];

/// Only modules import the loader library
const LIBCUBE_IMPORT: &str = "org.cubeengine.libcube.LibCube";
const SPONGE_IMPORT: &str = "org.spongepowered.api.Sponge";

/// Render one `@Dependency(...)` fragment
pub fn render_dependency(dependency: &DependencyDescriptor) -> String {
    format!(
        "@Dependency(id = \"{}\", version = \"{}\", optional = {})",
        dependency.id, dependency.version, dependency.optional
    )
}

/// Dependency fragments joined by `,\n`, in list order
pub fn render_dependencies(dependencies: &[DependencyDescriptor]) -> String {
    dependencies
        .iter()
        .map(render_dependency)
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Render the wrapper class for `declaration`.
///
/// `descriptor.kind` decides whether the `LibCube` import is emitted.
pub fn render(declaration: &ModuleDeclaration, descriptor: &GeneratedDescriptor) -> String {
    let class_name = &descriptor.identifiers.class_name;
    let id_constant = descriptor.identifiers.id_constant();
    let version_constant = descriptor.identifiers.version_constant();

    let mut code = String::new();

    code.push_str(&format!("package {};\n\n", declaration.package));

    for import in COMMON_IMPORTS {
        code.push_str(&format!("import {};\n", import));
    }
    if !descriptor.kind.is_core() {
        code.push_str(&format!("import {};\n", LIBCUBE_IMPORT));
    }
    code.push_str(&format!("import {};\n", SPONGE_IMPORT));
    code.push_str(&format!("import {};\n", declaration.qualified_name()));
    code.push('\n');

    // Plugin metadata block
    code.push_str(&format!("@Plugin(id = {}.{},\n", class_name, id_constant));
    code.push_str(&format!(
        "        name = \"{}\",\n",
        descriptor.identifiers.display_name
    ));
    code.push_str(&format!(
        "        version = {}.{},\n",
        class_name, version_constant
    ));
    code.push_str(&format!(
        "        description = \"{}\",\n",
        descriptor.description
    ));
    code.push_str(&format!("        url = \"{}\",\n", descriptor.url));
    code.push_str(&format!("        authors = \"{}\",\n", descriptor.authors));
    code.push_str(&format!(
        "        dependencies = {{{}}})\n",
        render_dependencies(&descriptor.dependencies)
    ));

    // Class body
    code.push_str(&format!("public class {} extends CubeEnginePlugin\n", class_name));
    code.push_str("{\n");
    code.push_str(&format!(
        "    public static final String {} = \"{}\";\n",
        id_constant, descriptor.identifiers.qualified_id
    ));
    code.push_str(&format!(
        "    public static final String {} = \"{}\";\n",
        version_constant, descriptor.version
    ));
    code.push('\n');
    code.push_str(&format!("    public {}()\n", class_name));
    code.push_str("    {\n");
    code.push_str(&format!(
        "         super({}.class);\n",
        declaration.simple_name
    ));
    code.push_str("    }\n");
    code.push('\n');
    code.push_str("    public String sourceVersion()\n");
    code.push_str("    {\n");
    code.push_str(&format!(
        "        return \"{}\";\n",
        descriptor.source_version
    ));
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}
