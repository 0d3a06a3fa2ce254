use super::*;

#[test]
fn confirm_message_names_user_and_destination_status() {
    assert_eq!(
        confirm_message("Ann", UserStatus::Inactive),
        "Are you sure you want to change Ann's status to inactive?"
    );
    assert_eq!(
        confirm_message("Bob", UserStatus::Active),
        "Are you sure you want to change Bob's status to active?"
    );
}

#[test]
fn active_sort_header_carries_a_direction_indicator() {
    assert_eq!(header_class((SortField::Name, SortDirection::Asc), SortField::Name), "sortable sort-asc");
    assert_eq!(
        header_class((SortField::Name, SortDirection::Desc), SortField::Name),
        "sortable sort-desc"
    );
}

#[test]
fn inactive_sort_headers_are_plain() {
    assert_eq!(header_class((SortField::Name, SortDirection::Asc), SortField::Email), "sortable");
}
