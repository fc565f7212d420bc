//! Built-in type names
//!
//! Names that never get a compound of their own in any source: language
//! keywords, Win32/COM typedefs, Objective-C scalars and the managed
//! keyword aliases. A miss on one of these resolves to a Primitive node
//! instead of a facade.

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    pub static ref PRIMITIVE_TYPES: HashSet<&'static str> = {
        let mut s = HashSet::with_capacity(128);

        // ═══════════════════════════════════════════════════════════
        // C / C++
        // ═══════════════════════════════════════════════════════════
        for name in [
            "void", "bool", "char", "wchar_t", "char16_t", "char32_t", "short", "int", "long",
            "long long", "float", "double", "long double", "signed char", "unsigned char",
            "unsigned short", "unsigned int", "unsigned long", "unsigned long long", "unsigned",
            "signed", "size_t", "ptrdiff_t", "intptr_t", "uintptr_t", "int8_t", "int16_t",
            "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t", "uint64_t", "auto",
            "nullptr_t",
        ] {
            s.insert(name);
        }

        // ═══════════════════════════════════════════════════════════
        // Win32 / COM / WinRT ABI
        // ═══════════════════════════════════════════════════════════
        for name in [
            "BOOL", "BOOLEAN", "BYTE", "CHAR", "WCHAR", "SHORT", "USHORT", "INT", "UINT", "LONG",
            "ULONG", "DWORD", "WORD", "QWORD", "FLOAT", "DOUBLE", "INT8", "INT16", "INT32",
            "INT64", "UINT8", "UINT16", "UINT32", "UINT64", "LONGLONG", "ULONGLONG", "SIZE_T",
            "HRESULT", "HSTRING", "HANDLE", "HWND", "LPCWSTR", "LPWSTR", "LPCSTR", "LPSTR",
            "PCWSTR", "PWSTR", "BSTR", "VARIANT", "GUID", "REFIID", "REFGUID", "IID", "LPVOID",
            "PVOID",
        ] {
            s.insert(name);
        }

        // ═══════════════════════════════════════════════════════════
        // Objective-C
        // ═══════════════════════════════════════════════════════════
        for name in [
            "id", "SEL", "IMP", "Class", "BOOL", "NSInteger", "NSUInteger", "CGFloat",
            "instancetype",
        ] {
            s.insert(name);
        }

        // ═══════════════════════════════════════════════════════════
        // Managed keyword aliases and their System types
        // ═══════════════════════════════════════════════════════════
        for name in [
            "object", "string", "byte", "sbyte", "ushort", "uint", "ulong", "decimal", "dynamic",
            "System.Void", "System.Boolean", "System.Byte", "System.SByte", "System.Char",
            "System.Int16", "System.UInt16", "System.Int32", "System.UInt32", "System.Int64",
            "System.UInt64", "System.Single", "System.Double", "System.Decimal",
            "System.String", "System.Object", "System.IntPtr", "System.UIntPtr",
            "System.Guid",
        ] {
            s.insert(name);
        }

        s
    };
}

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(name)
}
