use crate::codec::CodecError;
use crate::codec::sparse::{column_assignment, column_pointers, validate_column_pointers};

#[test]
fn assignment_lists_owning_column_per_nonzero() {
	// 3 columns: two non-zeros in col 0, none in col 1, three in col 2
	let col_ptr = [0, 2, 2, 5];
	assert_eq!(column_assignment(&col_ptr), vec![0, 0, 2, 2, 2]);
}

#[test]
fn pointers_rebuild_by_counting_and_prefix_sum() {
	let col_ptr = vec![0, 2, 2, 5];
	let assignment = column_assignment(&col_ptr);
	assert_eq!(column_pointers(3, &assignment, 0).expect("rebuild"), col_ptr);
}

#[test]
fn pointers_do_not_require_sorted_assignment() {
	assert_eq!(column_pointers(4, &[3, 0, 3, 1], 0).expect("rebuild"), vec![0, 1, 2, 2, 4]);
}

#[test]
fn empty_matrix_has_single_zero_pointer() {
	assert_eq!(column_assignment(&[0]), Vec::<u64>::new());
	assert_eq!(column_pointers(0, &[], 0).expect("rebuild"), vec![0]);
}

#[test]
fn out_of_range_assignment_is_malformed() {
	let err = column_pointers(2, &[0, 2], 11).expect_err("column 2 of 2");
	assert!(matches!(err, CodecError::Malformed { at: 11, .. }));
}

#[test]
fn pointer_validation() {
	assert!(validate_column_pointers(&[0, 1, 3], 3).is_ok());
	assert!(validate_column_pointers(&[1, 1, 3], 2).is_err());
	assert!(validate_column_pointers(&[0, 2, 1], 1).is_err());
	assert!(validate_column_pointers(&[0, 1, 3], 4).is_err());
	assert!(validate_column_pointers(&[], 0).is_err());
}
