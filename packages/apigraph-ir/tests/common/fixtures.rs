//! Canned universes
//!
//! A trimmed slice of the XAML UI surface as the native extractor (C++/CX)
//! and the managed reflector would emit it.

use apigraph_ir::features::compound_builder::{ManagedRecord, NativeRecord};
use apigraph_ir::{GraphConfig, GraphPipeline};

use super::builders::{
    ManagedMemberBuilder, ManagedRecordBuilder, NativeMemberBuilder, NativeRecordBuilder,
};

/// Native names that have no definition anywhere in [`xaml_native`]
pub const NATIVE_UNKNOWN: [&str; 4] = [
    "Windows.Foundation.Size",
    "Windows.Foundation.EventRegistrationToken",
    "Windows.UI.Xaml.RoutedEventHandler",
    "Windows.UI.Xaml.FocusState",
];

pub fn xaml_native() -> Vec<NativeRecord> {
    vec![
        NativeRecordBuilder::namespace("Windows").build(),
        NativeRecordBuilder::namespace("Windows::UI").build(),
        NativeRecordBuilder::namespace("Windows::UI::Xaml")
            .brief("Core XAML framework")
            .inner_namespace("Windows::UI::Xaml::Controls")
            .inner_class("Windows::UI::Xaml::UIElement")
            .inner_class("Windows::UI::Xaml::IUIElement")
            .build(),
        NativeRecordBuilder::namespace("Windows::UI::Xaml::Controls")
            .inner_class("Windows::UI::Xaml::Controls::Button")
            .build(),
        NativeRecordBuilder::namespace("Windows::Foundation").build(),
        NativeRecordBuilder::namespace("Windows::Foundation::Collections").build(),
        NativeRecordBuilder::class("Windows::UI::Xaml::UIElement")
            .language("C++/CX")
            .brief("Base class for visual elements")
            .member(
                NativeMemberBuilder::property("Visibility", "Windows::UI::Xaml::Visibility")
                    .brief("Gets or sets visibility")
                    .build(),
            )
            .member(
                NativeMemberBuilder::function("Measure", "void")
                    .param("availableSize", "Windows::Foundation::Size", "The available space")
                    .build(),
            )
            .build(),
        NativeRecordBuilder::class("Windows::UI::Xaml::Controls::Button")
            .language("C++/CX")
            .brief("Native button")
            .base("UIElement")
            .member(
                NativeMemberBuilder::function("Button", "")
                    .brief("Creates a button")
                    .build(),
            )
            .member(NativeMemberBuilder::function("~Button", "").build())
            .member(
                NativeMemberBuilder::function(
                    "add_Click",
                    "Windows::Foundation::EventRegistrationToken",
                )
                .param("handler", "Windows::UI::Xaml::RoutedEventHandler^", "The handler")
                .build(),
            )
            .member(NativeMemberBuilder::variable("ClickMode", "int").build())
            .build(),
        NativeRecordBuilder::new("enum", "Windows::UI::Xaml::Visibility")
            .brief("Element visibility")
            .enum_value("Visible", "Display the element")
            .enum_value("Collapsed", "Do not display the element")
            .build(),
        NativeRecordBuilder::interface("Windows::UI::Xaml::IUIElement")
            .member(
                NativeMemberBuilder::function("Focus", "bool")
                    .brief("Attempts to set focus")
                    .param("value", "Windows::UI::Xaml::FocusState", "How focus was set")
                    .build(),
            )
            .build(),
        NativeRecordBuilder::class("Windows::Foundation::Collections::Vector<T>")
            .template_param("typename T")
            .member(
                NativeMemberBuilder::function("GetAt", "T")
                    .param("index", "unsigned int", "Zero-based index")
                    .build(),
            )
            .build(),
        NativeRecordBuilder::new("file", "UIElement.h").build(),
        NativeRecord {
            id: "class_broken".into(),
            kind: "class".into(),
            name: None,
            ..Default::default()
        },
    ]
}

pub fn xaml_managed() -> Vec<ManagedRecord> {
    vec![
        ManagedRecordBuilder::class("Windows.UI.Xaml", "UIElement")
            .member(
                ManagedMemberBuilder::property("Visibility", "Windows.UI.Xaml.Visibility").build(),
            )
            .member(
                ManagedMemberBuilder::method("Measure", "System.Void")
                    .param("availableSize", "Windows.Foundation.Size")
                    .build(),
            )
            .build(),
        ManagedRecordBuilder::class("Windows.UI.Xaml.Controls", "Button")
            .base("Windows.UI.Xaml.UIElement")
            .summary("Represents a button control")
            .member(ManagedMemberBuilder::constructor().build())
            .build(),
        ManagedRecordBuilder::enumeration("Windows.UI.Xaml", "Visibility")
            .field("value__", "")
            .field("Visible", "0")
            .field("Collapsed", "1")
            .build(),
        ManagedRecordBuilder::interface("Windows.UI.Xaml", "IUIElement")
            .member(
                ManagedMemberBuilder::method("Focus", "System.Boolean")
                    .param("value", "Windows.UI.Xaml.FocusState")
                    .build(),
            )
            .build(),
        ManagedRecordBuilder::interface("Windows.Foundation.Collections", "IVector`1")
            .generic_param("T")
            .member(
                ManagedMemberBuilder::method("GetAt", "T")
                    .param("index", "System.UInt32")
                    .build(),
            )
            .build(),
    ]
}

/// Both sides of the XAML slice through a pipeline with `config`
pub fn xaml_pipeline(config: GraphConfig) -> GraphPipeline {
    GraphPipeline::new(config)
        .expect("fixture config is valid")
        .add_native(xaml_native())
        .add_managed(xaml_managed())
}
