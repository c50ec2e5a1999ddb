//! Industry type catalog

pub const INDUSTRY_TYPES: &[&str] = &[
    "Accounting",
    "Advertising",
    "Aerospace",
    "Agriculture",
    "Airline",
    "Apparel & Accessories",
    "Automotive",
    "Banking",
    "Biotechnology",
    "Broadcasting",
    "Brokerage",
    "Chemical",
    "Computer",
    "Consulting",
    "Consumer Products",
    "Cosmetics",
    "Defense",
    "Department Stores",
    "Education",
    "Electronics",
    "Energy",
    "Entertainment & Leisure",
    "Executive Search",
    "Financial Services",
    "Food, Beverage & Tobacco",
    "Grocery",
    "Health Care",
    "Internet Publishing",
    "Investment Banking",
    "Legal",
    "Manufacturing",
    "Motion Picture & Video",
    "Music",
    "Newspaper Publishers",
    "Online Auctions",
    "Pension Funds",
    "Pharmaceuticals",
    "Private Equity",
    "Publishing",
    "Real Estate",
    "Retail & Wholesale",
    "Securities & Commodity Exchanges",
    "Service",
    "Soap & Detergent",
    "Software",
    "Sports",
    "Technology",
    "Telecommunications",
    "Television",
    "Transportation",
    "Venture Capital",
];
