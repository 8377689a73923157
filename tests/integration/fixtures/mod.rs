// Clippings exports with known expected groupings

/// Two books; Book A's highlights arrive out of page order
pub const TWO_BOOKS: &str = concat!(
    "\u{feff}Book A (Author X)\r\n",
    "- Your Highlight on page 5 | Location 70-71 | Added on Monday, 1 April 2019 10:00:00\r\n",
    "\r\n",
    "Highlight on page five.\r\n",
    "==========\r\n",
    "Book A (Author X)\r\n",
    "- Your Highlight on page 2 | Location 30-31 | Added on Monday, 1 April 2019 10:05:00\r\n",
    "\r\n",
    "Highlight on page two.\r\n",
    "==========\r\n",
    "Book B (Author Y)\r\n",
    "- Your Highlight on page 1 | Location 10-12 | Added on Tuesday, 2 April 2019 09:00:00\r\n",
    "\r\n",
    "Opening line of book B.\r\n",
    "==========\r\n",
);

/// A selection extended twice on the device, then a shorter re-highlight
pub const EXTENDED_SELECTION: &str = concat!(
    "Book C (Author Z)\r\n",
    "- Your Highlight on page 9 | Location 100 | Added on Monday, 1 April 2019 10:00:00\r\n",
    "\r\n",
    "It was a bright\r\n",
    "==========\r\n",
    "Book C (Author Z)\r\n",
    "- Your Highlight on page 9 | Location 100-101 | Added on Monday, 1 April 2019 10:00:05\r\n",
    "\r\n",
    "It was a bright cold day in April\r\n",
    "==========\r\n",
    "Book C (Author Z)\r\n",
    "- Your Highlight on page 9 | Location 100-102 | Added on Monday, 1 April 2019 10:00:09\r\n",
    "\r\n",
    "It was a bright cold day in April, and the clocks were striking thirteen.\r\n",
    "==========\r\n",
    "Book C (Author Z)\r\n",
    "- Your Highlight on page 9 | Location 100 | Added on Monday, 1 April 2019 10:01:00\r\n",
    "\r\n",
    "bright cold day\r\n",
    "==========\r\n",
);

/// Valid records interleaved with export artifacts
pub const WITH_ARTIFACTS: &str = concat!(
    "==========\r\n",
    "Book D (Author W)\r\n",
    "- Your Bookmark on page 4 | Location 50 | Added on Monday, 1 April 2019 10:00:00\r\n",
    "\r\n",
    "\r\n",
    "==========\r\n",
    "Book D (Author W)\r\n",
    "- Your Highlight on page 4 | Location 50 | Added on Monday, 1 April 2019 10:00:00\r\n",
    "\r\n",
    "Survivor.\r\n",
    "==========\r\n",
    "Notes without author\r\n",
    "- Your Highlight at location 12 | Added on Monday, 1 April 2019 10:00:00\r\n",
    "\r\n",
    "Pageless highlight.\r\n",
    "==========\r\n",
    "\r\n",
);
