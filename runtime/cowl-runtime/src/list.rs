///
/// List Exports
///
/// Lists cross the boundary as `*mut List` boxes owned by generated code.
/// Indices and stored values are consumed; `cowl_list_get` returns a clone.
/// A null list is ignored and any value passed with it is dropped.
///

use cowl_std_collections::List;

use crate::repr::AnyRepr;

#[unsafe(no_mangle)]
pub extern "C" fn cowl_list_new() -> *mut List {
    Box::into_raw(Box::new(List::new()))
}

/// Free a list and every element in it
///
/// # Safety
/// `list` must come from `cowl_list_new` and not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_free(list: *mut List) {
    if !list.is_null() {
        drop(unsafe { Box::from_raw(list) });
    }
}

/// # Safety
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_len(list: *const List) -> usize {
    match unsafe { list.as_ref() } {
        Some(list) => list.len(),
        None => 0,
    }
}

/// The `length` builtin
///
/// # Safety
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_length(list: *const List) -> f64 {
    match unsafe { list.as_ref() } {
        Some(list) => list.length(),
        None => 0.0,
    }
}

/// # Safety
/// `list` must be null or a live list; `value` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_append(list: *mut List, value: AnyRepr) {
    let value = unsafe { value.into_any() };
    if let Some(list) = unsafe { list.as_mut() } {
        list.append(value);
    }
}

/// # Safety
/// `list` must be null or a live list; `index` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_get(list: *const List, index: AnyRepr) -> AnyRepr {
    let index = unsafe { index.into_any() };
    match unsafe { list.as_ref() } {
        Some(list) => AnyRepr::from_any(list.get(index)),
        None => AnyRepr::empty_str(),
    }
}

/// # Safety
/// `list` must be null or a live list; `index` must be a live value.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_delete(list: *mut List, index: AnyRepr) {
    let index = unsafe { index.into_any() };
    if let Some(list) = unsafe { list.as_mut() } {
        list.delete(index);
    }
}

/// # Safety
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_delete_all(list: *mut List) {
    if let Some(list) = unsafe { list.as_mut() } {
        list.delete_all();
    }
}

/// # Safety
/// `list` must be null or a live list; `index` and `value` must be live values.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowl_list_replace(list: *mut List, index: AnyRepr, value: AnyRepr) {
    let (index, value) = unsafe { (index.into_any(), value.into_any()) };
    if let Some(list) = unsafe { list.as_mut() } {
        list.replace(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::StaticStr;

    static LAST: StaticStr<4> = StaticStr::new(*b"LAST");

    #[test]
    fn test_list_lifecycle() {
        let list = cowl_list_new();
        unsafe {
            assert_eq!(cowl_list_len(list), 0);
            for i in 1..=3 {
                cowl_list_append(list, AnyRepr::number(i as f64));
            }
            assert_eq!(cowl_list_length(list), 3.0);
            assert_eq!(cowl_list_get(list, LAST.repr()), AnyRepr::number(3.0));

            cowl_list_delete(list, AnyRepr::number(1.0));
            assert_eq!(cowl_list_get(list, AnyRepr::number(1.0)), AnyRepr::number(2.0));

            cowl_list_delete_all(list);
            assert_eq!(cowl_list_len(list), 0);
            cowl_list_free(list);
        }
    }

    #[test]
    fn test_null_list_is_ignored() {
        let null = std::ptr::null_mut();
        unsafe {
            cowl_list_append(null, AnyRepr::number(1.0));
            cowl_list_delete_all(null);
            assert_eq!(cowl_list_len(null), 0);
            assert_eq!(cowl_list_get(null, AnyRepr::number(1.0)), AnyRepr::empty_str());
            cowl_list_free(null);
        }
    }
}
