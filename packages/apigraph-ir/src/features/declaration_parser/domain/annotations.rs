//! Annotation noise tokens
//!
//! Platform parameter annotations (SAL, RPC marshalling, IDL attributes)
//! that appear inside declaration strings. They are stripped in table
//! order, so a token must come before every shorter token it contains:
//! `_COM_Outptr_result_maybenull_` is removed before `_COM_Outptr_` could
//! eat its prefix.

/// Flags an annotation contributes to the descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationEffect {
    pub in_param: bool,
    pub out_param: bool,
    pub optional: bool,
    pub com_ptr: bool,
}

impl AnnotationEffect {
    pub const NONE: AnnotationEffect = AnnotationEffect {
        in_param: false,
        out_param: false,
        optional: false,
        com_ptr: false,
    };
    pub const IN: AnnotationEffect = AnnotationEffect {
        in_param: true,
        ..Self::NONE
    };
    pub const IN_OPT: AnnotationEffect = AnnotationEffect {
        in_param: true,
        optional: true,
        ..Self::NONE
    };
    pub const OUT: AnnotationEffect = AnnotationEffect {
        out_param: true,
        ..Self::NONE
    };
    pub const OUT_OPT: AnnotationEffect = AnnotationEffect {
        out_param: true,
        optional: true,
        ..Self::NONE
    };
    pub const IN_OUT: AnnotationEffect = AnnotationEffect {
        in_param: true,
        out_param: true,
        ..Self::NONE
    };
    pub const IN_OUT_OPT: AnnotationEffect = AnnotationEffect {
        in_param: true,
        out_param: true,
        optional: true,
        ..Self::NONE
    };
    pub const COM_OUT: AnnotationEffect = AnnotationEffect {
        out_param: true,
        com_ptr: true,
        ..Self::NONE
    };
    pub const COM_OUT_OPT: AnnotationEffect = AnnotationEffect {
        out_param: true,
        optional: true,
        com_ptr: true,
        ..Self::NONE
    };
    pub const OPTIONAL: AnnotationEffect = AnnotationEffect {
        optional: true,
        ..Self::NONE
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationToken {
    pub text: &'static str,
    pub effect: AnnotationEffect,
}

const fn token(text: &'static str, effect: AnnotationEffect) -> AnnotationToken {
    AnnotationToken { text, effect }
}

/// Built-in annotation tokens, most specific first
pub const ANNOTATION_TOKENS: &[AnnotationToken] = &[
    // COM out pointers
    token("_COM_Outptr_result_maybenull_", AnnotationEffect::COM_OUT_OPT),
    token("_COM_Outptr_opt_result_maybenull_", AnnotationEffect::COM_OUT_OPT),
    token("_COM_Outptr_opt_", AnnotationEffect::COM_OUT_OPT),
    token("_COM_Outptr_", AnnotationEffect::COM_OUT),
    // Plain out pointers
    token("_Outptr_result_maybenull_", AnnotationEffect::OUT_OPT),
    token("_Outptr_result_buffer_", AnnotationEffect::OUT),
    token("_Outptr_opt_", AnnotationEffect::OUT_OPT),
    token("_Outptr_", AnnotationEffect::OUT),
    // Buffers
    token("_Out_writes_bytes_opt_", AnnotationEffect::OUT_OPT),
    token("_Out_writes_bytes_", AnnotationEffect::OUT),
    token("_Out_writes_opt_", AnnotationEffect::OUT_OPT),
    token("_Out_writes_", AnnotationEffect::OUT),
    token("_In_reads_bytes_opt_", AnnotationEffect::IN_OPT),
    token("_In_reads_bytes_", AnnotationEffect::IN),
    token("_In_reads_opt_", AnnotationEffect::IN_OPT),
    token("_In_reads_", AnnotationEffect::IN),
    // Scalars
    token("_Inout_opt_", AnnotationEffect::IN_OUT_OPT),
    token("_Inout_", AnnotationEffect::IN_OUT),
    token("_In_opt_z_", AnnotationEffect::IN_OPT),
    token("_In_opt_", AnnotationEffect::IN_OPT),
    token("_In_z_", AnnotationEffect::IN),
    token("_Out_opt_", AnnotationEffect::OUT_OPT),
    token("_In_", AnnotationEffect::IN),
    token("_Out_", AnnotationEffect::OUT),
    token("_Ret_maybenull_", AnnotationEffect::OPTIONAL),
    token("_Reserved_", AnnotationEffect::NONE),
    // RPC marshalling
    token("__RPC__deref_out_opt", AnnotationEffect::OUT_OPT),
    token("__RPC__deref_out", AnnotationEffect::OUT),
    token("__RPC__in_opt", AnnotationEffect::IN_OPT),
    token("__RPC__in", AnnotationEffect::IN),
    token("__RPC__out", AnnotationEffect::OUT),
    // IDL attributes
    token("[out, retval]", AnnotationEffect::OUT),
    token("[out,retval]", AnnotationEffect::OUT),
    token("[in, out]", AnnotationEffect::IN_OUT),
    token("[in,out]", AnnotationEffect::IN_OUT),
    token("[optional]", AnnotationEffect::OPTIONAL),
    token("[in]", AnnotationEffect::IN),
    token("[out]", AnnotationEffect::OUT),
];
