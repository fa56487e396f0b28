//! Scene inspector demo application
//!
//! Stands in for the properties panel: builds a small scene, then drives the
//! registry through the same operation surface a GUI panel would use and
//! prints the derived property values after each edit.

use editor_core::inspector::{clamp_scale_input, PropertySheet};
use editor_core::prelude::*;

const CONFIG_PATH: &str = "inspector.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    editor_core::foundation::logging::init();

    let config = EditorConfig::load_or_default(CONFIG_PATH);
    log::info!(
        "starting inspector demo in {} mode",
        config.default_transform_mode.label()
    );

    let mut registry = SceneRegistry::with_transform_mode(config.default_transform_mode);

    // Populate the scene the way the toolbar's "add object" buttons would
    let cube = shared(
        MeshObject::new(Primitive::Cube)
            .with_material(StandardMaterial::with_color(Color::from_hex("#4f8fba")?)),
    );
    let sphere = shared(
        MeshObject::new(Primitive::Sphere)
            .at(Vec3::new(2.5, 0.0, 0.0))
            .with_material(StandardMaterial::with_color(Color::from_hex("#da863e")?)),
    );
    let rig = shared(EmptyObject::new().at(Vec3::new(0.0, 4.0, 0.0)));

    let cube_id = registry.add_object(cube.clone(), "Cube");
    registry.add_object(sphere.clone(), "Sphere");
    registry.add_object(rig, "Light Rig");

    print_outline(&registry);

    // Select the cube and edit it the way panel fields would
    registry.set_selected_object(Some(cube));
    registry.set_transform_mode(TransformMode::Rotate);

    registry.update_object_position(Axis::Y, 1.0);
    registry.update_object_rotation(Axis::Y, 45.0);
    registry.update_object_scale(Axis::X, clamp_scale_input(0.02));
    registry.update_object_color(Color::from_hex("#ff8800")?);
    registry.update_object_opacity(0.75);
    print_selection(&registry);

    registry.update_object_name(cube_id, "Hero Cube");

    // Hiding the selected object drops the selection
    registry.toggle_visibility(cube_id);
    assert!(registry.selected_object().is_none());
    print_outline(&registry);

    // Move on to the sphere, then tear it down
    registry.set_selected_object(Some(sphere));
    registry.update_object_opacity(1.0);
    print_selection(&registry);

    registry.remove_object(cube_id);
    print_outline(&registry);

    Ok(())
}

/// Print the outliner view: every entry with its visibility marker
fn print_outline(registry: &SceneRegistry) {
    println!("scene ({} objects):", registry.object_count());
    for entry in registry.objects() {
        let marker = if entry.visible { "o" } else { "-" };
        let selected = if registry.is_selected(&entry.renderable) {
            " [selected]"
        } else {
            ""
        };
        println!("  {marker} {} {:?}{selected}", entry.id, entry.name);
    }
}

/// Print the properties panel view of the current selection
fn print_selection(registry: &SceneRegistry) {
    let Some(sheet) = PropertySheet::capture(registry) else {
        println!("properties: no selection");
        return;
    };

    println!(
        "properties of {}:",
        sheet.name.as_deref().unwrap_or("<unregistered>")
    );
    println!("  mode      {}", registry.transform_mode().label());
    println!("  position  {:?}", sheet.position);
    println!("  rotation  {:?} deg", sheet.rotation_degrees);
    println!("  scale     {:?}", sheet.scale);
    if let (Some(hex), Some(percent)) = (sheet.color_hex.as_deref(), sheet.opacity_percent()) {
        println!("  color     {hex}");
        println!("  opacity   {percent}%");
    }
}
